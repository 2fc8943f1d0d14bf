mod autocomplete_error;

pub use autocomplete_error::{AutocompleteError, ErrorKind};
