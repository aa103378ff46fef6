//! Host-side helper: `cargo run` compiles the WASM bundle into `static/pkg`
//! and starts a local HTTP server for `static/`.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::process::{Command, Stdio};
    use std::{thread, time::Duration};

    // 1. Compile the wasm bundle via wasm-pack into static/pkg
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    // 2. Serve `static/` on 8000
    println!("Launching local server at http://127.0.0.1:8000 …");
    let _server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
