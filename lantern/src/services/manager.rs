/// Instance operation forwarded verbatim to the instance-management layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InstanceRequest {
    /// Launch a local instance or install a remote one.
    Launch { name: String },
    /// Mark the instance as needing an update, then launch it.
    ForceUpdate { name: String },
    /// Wipe and reinstall the instance files, then launch it.
    HardUpdate { name: String },
    /// Delete the instance files.
    Delete { name: String },
}

impl InstanceRequest {
    pub(crate) fn name(&self) -> &str {
        match self {
            Self::Launch { name }
            | Self::ForceUpdate { name }
            | Self::HardUpdate { name }
            | Self::Delete { name } => name,
        }
    }

    /// Whether the instance list should be reloaded once the request was
    /// handed off.
    pub(crate) fn reloads_list(&self) -> bool {
        matches!(self, Self::Delete { .. } | Self::HardUpdate { .. })
    }
}

/// Receiver of instance requests.
pub(crate) trait InstanceManager: Send + Sync {
    fn dispatch(&self, request: &InstanceRequest);
}

/// Manager that records requests in the log.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LoggingInstanceManager;

impl InstanceManager for LoggingInstanceManager {
    fn dispatch(&self, request: &InstanceRequest) {
        log::info!("instance request for {}: {request:?}", request.name());
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceRequest;

    #[test]
    fn given_destructive_request_when_checking_reload_then_list_is_reloaded() {
        let delete = InstanceRequest::Delete {
            name: String::from("atm9"),
        };
        let launch = InstanceRequest::Launch {
            name: String::from("atm9"),
        };

        assert!(delete.reloads_list());
        assert!(!launch.reloads_list());
        assert_eq!(delete.name(), "atm9");
    }
}
