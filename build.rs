use chrono::{SecondsFormat, Utc};

fn main() {
    // stamped into the page's `build-time` meta tag by `app::shell`
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={stamp}");

    // restamp whenever the site itself changes, not only this script
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=public");
}
