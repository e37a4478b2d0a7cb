use anyhow::Result;
use frac64::Fraction;

fn run() -> Result<()> {
    let f1 = Fraction::new(3, 4)?;
    let f2 = Fraction::new(5, 6)?;

    println!("f1: {} = {}", f1, f1.decimal_value());
    println!("f2: {} = {}", f2, f2.decimal_value());

    println!("Sum: {}", f1 + f2);
    println!("Difference: {}", f1 - f2);
    println!("Product: {}", f1 * f2);
    println!("Quotient: {}", f1.checked_div(f2)?);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
