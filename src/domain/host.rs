//! Fixed names in the host application's filesystem layout.

/// Directory under the host root that contains all modules.
pub const PACKAGES_DIR: &str = "packages";

/// Reserved host-system module name; never eligible for configuration.
pub const RESERVED_MODULE: &str = "system";

/// The module this tool itself ships as; its directory holds the config file.
pub const SELF_MODULE: &str = "transifex-fetcher";

/// File name of the persisted configuration inside the tool's own module directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Directory inside a module where language files are generated.
pub const LANGUAGES_DIR: &str = "languages";

/// Message domain used when the user leaves the domain prompt blank.
pub const DEFAULT_DOMAIN: &str = "messages";
