// Desktop builds on Linux link against libxdo; fail early with an install hint when it is missing.

fn main() {
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if is_desktop && is_linux && !libxdo_present() {
        eprintln!();
        eprintln!("  error: the Aether Events desktop build on Linux requires libxdo.");
        eprintln!();
        eprintln!("  Install the development package, then run again:");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!();
        eprintln!("  Or use the browser build instead: dx serve");
        eprintln!();
        std::process::exit(1);
    }
}

fn libxdo_present() -> bool {
    // libxdo may not ship a .pc file, so fall back to the linker cache
    std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success())
        .unwrap_or_else(|_| {
            std::process::Command::new("ldconfig")
                .args(["-p"])
                .output()
                .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
                .unwrap_or(false)
        })
}
