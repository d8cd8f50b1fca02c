/// Configuration constants for the TFE API
pub mod api {
    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// JSON:API media type expected by TFE for request bodies
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";
}

/// HTTP client settings
pub mod http {
    /// Time allowed to establish a connection, in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Upper bound for a whole request/response exchange, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for the settings file
pub mod settings {
    /// Directory under the platform config dir holding the settings file
    pub const DIR_NAME: &str = "tfws";

    /// Settings file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable overriding the settings file path
    pub const PATH_ENV_VAR: &str = "TFWS_CONFIG";
}

/// Default values for CLI
pub mod defaults {
    /// Branch applied by --reset-workspace
    pub const BRANCH: &str = "main";

    /// Terraform file holding the cloud/remote backend block
    pub const TF_FILE: &str = "terraform.tf";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
