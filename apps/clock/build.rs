// ABOUTME: Build script that compiles the clock's .slint UI into Rust code.
// ABOUTME: The clock-face image is embedded into the binary along with it.

fn main() {
    slint_build::compile("ui/clock.slint").unwrap();
}
