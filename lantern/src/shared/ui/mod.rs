pub(crate) mod fonts;
pub(crate) mod icons;
pub(crate) mod palette;
