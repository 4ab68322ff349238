//! Shell Content Client

use fos_content::ContentClient;

/// Product token placed in the user agent
const PRODUCT_NAME: &str = "fOS-Shell";

/// Default user agent of the shell
pub fn shell_user_agent() -> String {
    format!(
        "Mozilla/5.0 ({}; {}) {}/{}",
        platform_name(),
        std::env::consts::ARCH,
        PRODUCT_NAME,
        crate::VERSION
    )
}

fn platform_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "X11; Linux",
        "android" => "Linux; Android",
        "macos" => "Macintosh",
        "windows" => "Windows NT",
        other => other,
    }
}

/// Content client for every shell process
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellContentClient;

impl ContentClient for ShellContentClient {
    fn user_agent(&self) -> String {
        shell_user_agent()
    }
}
