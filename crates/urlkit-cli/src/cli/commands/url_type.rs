//! Type command: resolve a URL's content type into a fixed-size buffer.

use urlkit_core::config::UrlkitConfig;
use urlkit_core::mime::MimeResolver;

pub fn run_type(cfg: &UrlkitConfig, url: &str, port: u16, capacity: usize) {
    let registry = cfg.mime_registry();
    let resolver = MimeResolver::new(&registry, &port);
    let mut buf = vec![0u8; capacity];
    println!("{}", resolver.url_type(url, &mut buf));
}
