pub mod display {
    pub const ELLIPSIS: &str = "...";
}

pub mod limits {
    pub const MIN_LIMIT: usize = 1;
    pub const MAX_SUGGESTED_TYPES: usize = 5;
    pub const MAX_LISTED_TYPES: usize = 24;
}

pub mod registry {
    pub const TYPE_PREFIX: &str = "AutoComplete";
}

pub mod env {
    pub const LIMIT: &str = "AUTOCOMPLETE_LIMIT";
    pub const DATABASE: &str = "AUTOCOMPLETE_DB";
    pub const LOG_LEVEL: &str = "AUTOCOMPLETE_LOG_LEVEL";
}
