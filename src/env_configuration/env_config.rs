use crate::common::*;

#[doc = r#"
    Reads an optional environment variable.

    Empty values are treated as unset.

    # Arguments
    * `key` - environment variable name

    # Returns
    * `Option<String>` - the value, or `None` when unset or empty
"#]
fn get_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.trim().is_empty())
}

#[doc = r#"
    Path of the TOML settings file, read from `SERVER_CONFIG_PATH`.

    The file is optional. When the variable is unset every section of
    `TotalConfig` uses its built-in defaults (localhost / root /
    MINI_SALES_PROJECT / retail_sales / visuals).
"#]
pub static SERVER_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_optional("SERVER_CONFIG_PATH"));

#[doc = r#"
    MySQL password, read from `MYSQL_PASSWORD`.

    This is the only secret the program needs and it is never stored in the
    settings file. When unset, an empty password is used and a warning is logged.
"#]
pub static MYSQL_PASSWORD: once_lazy<String> = once_lazy::new(|| {
    get_env_optional("MYSQL_PASSWORD").unwrap_or_else(|| {
        warn!("[ENV file read] 'MYSQL_PASSWORD' is not set. Connecting without a password.");
        String::new()
    })
});
