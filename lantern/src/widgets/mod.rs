pub(crate) mod carousel;
pub(crate) mod chrome;
pub(crate) mod instances;
pub(crate) mod settings;
pub(crate) mod sidebar;
