//! Mime-list command: dump the effective registry.

use urlkit_core::config::UrlkitConfig;

pub fn run_mime_list(cfg: &UrlkitConfig) {
    let registry = cfg.mime_registry();
    for (ext, content_type) in registry.sorted_entries() {
        println!("{}\t{}", ext, content_type);
    }
}
