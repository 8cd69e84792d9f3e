//! Static Go template files embedded at compile time

pub mod library {
    pub const LIB_GO: &str = include_str!("../templates/go/library/lib.go");
    pub const LIB_TEST_GO: &str = include_str!("../templates/go/library/lib_test.go");
}

pub mod cli {
    pub const MAIN_GO: &str = include_str!("../templates/go/cli/main.go");
}

pub mod server {
    pub const INDEX_HTML: &str = include_str!("../templates/go/server/index.html");
    pub const INDEX_CSS: &str = include_str!("../templates/go/server/index.css");
    pub const INDEX_JS: &str = include_str!("../templates/go/server/index.js");
    pub const MAIN_GO: &str = include_str!("../templates/go/server/main.go");
}
