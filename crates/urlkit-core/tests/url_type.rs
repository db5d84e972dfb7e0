//! Content-type resolution wired from configuration, as a server would.

use std::sync::atomic::AtomicU16;
use std::sync::Arc;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::mime::{MimeResolver, DEFAULT_CONTENT_TYPE};

fn config() -> UrlkitConfig {
    toml::from_str(
        r#"
            listen_port = 8080
            output_capacity = 16

            [mime]
            ".wasm" = "application/wasm"
            ".htm" = "text/html; charset=utf-8"
        "#,
    )
    .unwrap()
}

#[test]
fn config_registry_overrides_defaults() {
    let cfg = config();
    let registry = cfg.mime_registry();
    let resolver = MimeResolver::new(&registry, &cfg.listen_port);
    assert_eq!(resolver.content_type("/app/main.WASM"), "application/wasm");
    assert_eq!(resolver.content_type("/index.htm"), "text/html; charset=utf-8");
    assert_eq!(resolver.content_type("/logo.png"), "image/png");
}

#[test]
fn output_capacity_bounds_the_result() {
    let cfg = config();
    let registry = cfg.mime_registry();
    let resolver = MimeResolver::new(&registry, &cfg.listen_port);
    let mut buf = vec![0u8; cfg.output_capacity];
    let content_type = resolver.url_type("/index.htm", &mut buf).to_string();
    assert_eq!(content_type, "text/html; char");
    assert_eq!(content_type.len(), cfg.output_capacity - 1);
}

#[test]
fn defaults_for_unclassifiable_urls() {
    let cfg = config();
    let registry = cfg.mime_registry();
    let resolver = MimeResolver::new(&registry, &cfg.listen_port);
    let mut buf = [0u8; 64];
    assert_eq!(resolver.url_type("", &mut buf), DEFAULT_CONTENT_TYPE);
    assert_eq!(resolver.url_type("/a.b/c.nope", &mut buf), DEFAULT_CONTENT_TYPE);
    assert_eq!(resolver.url_type("/x.asp/extra", &mut buf), "text/html; charset=utf-8");
}

#[test]
fn resolver_shares_a_live_port_source() {
    let cfg = config();
    let registry = Arc::new(cfg.mime_registry());
    let port = Arc::new(AtomicU16::new(cfg.listen_port));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let port = Arc::clone(&port);
            std::thread::spawn(move || {
                let resolver = MimeResolver::new(&*registry, &*port);
                let url = format!("http://h:{i}/f{i}.GIF");
                resolver.content_type(&url)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "image/gif");
    }
}
