//! Stable identifiers for error kinds, adapters and patch rules.
//!
//! Kind names are the exception class names Python prints. Patch IDs are short kebab-case
//! discriminators.

// Kinds
pub const KIND_FALLBACK: &str = "Other";
pub const KIND_NAME_ERROR: &str = "NameError";
pub const KIND_SYNTAX_ERROR: &str = "SyntaxError";
pub const KIND_ATTRIBUTE_ERROR: &str = "AttributeError";
pub const KIND_TYPE_ERROR: &str = "TypeError";

// Adapters
pub const ADAPTER_SKULPT: &str = "skulpt";
pub const ADAPTER_PYODIDE: &str = "pyodide";

// Patch rules
pub const PATCH_LIST_APPEND: &str = "list-append";
pub const PATCH_DEFINE_NAME: &str = "define-name";
pub const PATCH_BLOCK_COLON: &str = "block-colon";
pub const PATCH_STR_CONCAT: &str = "str-concat";
