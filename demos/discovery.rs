use spldv::{evaluate_guess, GuessFeedback, LinearEquation};

fn main() -> spldv::Result<()> {
    let first = LinearEquation::new(1.0, -1.0, 2.0)?;
    let second = LinearEquation::new(2.0, 1.0, 7.0)?;
    println!("{first}  |  {second}");

    for guess in [0.0, 2.0, 2.995, 5.0] {
        match evaluate_guess(&first, &second, guess) {
            GuessFeedback::Near { x, y } => {
                println!("x = {guess}: intersection near ({x:.2}, {y:.2})")
            }
            GuessFeedback::MoveRight { gap } => {
                println!("x = {guess}: gap {gap:.4}, try a larger x")
            }
            GuessFeedback::MoveLeft { gap } => {
                println!("x = {guess}: gap {gap:.4}, try a smaller x")
            }
            other => println!("x = {guess}: {other:?}"),
        }
    }
    Ok(())
}
