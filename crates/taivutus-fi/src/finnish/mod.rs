// Finnish language data
pub(crate) mod constants;
