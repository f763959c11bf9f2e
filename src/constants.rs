//! Common constants used throughout lin.

/// Version reported by `-v/--version`
pub const VERSION: &str = "1.0.0";

/// Repository the project skeleton is cloned from
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/Worter-power/ph-demo.git";

/// Page directory shipped by the template, renamed after the project name
pub const BASE_PAGE_DIR: &str = "src/page/base";

/// Parent of the page directories
pub const PAGE_ROOT: &str = "src/page";

/// npm configuration file written at the project root for sass projects
pub const NPMRC_FILE: &str = ".npmrc";

/// Mirror for the node-sass binary download
pub const SASS_MIRROR_LINE: &str =
    "sass_binary_site=https://npm.taobao.org/mirrors/node-sass/";

/// Separator placed before the mirror line when appending to an existing `.npmrc`
pub const NPMRC_LINE_BREAK: &str = "\r\n";
