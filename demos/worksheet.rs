use spldv::prelude::worksheet_eqs;
use spldv::Variable;

fn main() {
    for target in [Variable::X, Variable::Y] {
        println!("Eliminating {target:?}:");
        match worksheet_eqs("2*x + 3*y = 7", "x - 4*y = 1", target) {
            Ok(lines) => println!("{}", lines.join("\n")),
            Err(err) => eprintln!("error: {err}"),
        }
        println!();
    }
}
