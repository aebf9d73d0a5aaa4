use neurostack_core::safety::{quick_checks, render_notes};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Safety Checks");
    for check in quick_checks() {
        println!("  * {check}");
    }
    println!();
    print!("{}", render_notes());
    Ok(())
}
