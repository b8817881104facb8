use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

/// Regenerate `assets/tailwind.css` from `tailwind.css`, scanning this
/// crate and x402-ui for class names. Without a local tailwindcss install
/// the checked-in stylesheet is kept as is.
fn generate_tailwind() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!("cargo:rerun-if-changed={}", Path::new(manifest_dir).join("src").display());
    println!(
        "cargo:rerun-if-changed={}",
        Path::new(manifest_dir).join("../x402-ui/src").display()
    );

    let tailwind_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    if !tailwind_bin.exists() {
        println!(
            "cargo:warning=tailwindcss not installed (run `npm install` in x402-web), keeping {}",
            tailwind_output.display()
        );
        return;
    }

    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
            eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
            panic!("Tailwind CSS generation failed");
        }
        Err(e) => panic!("Failed to run tailwindcss: {}", e),
    }
}
