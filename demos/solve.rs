use spldv::prelude::solve_eqs;

fn main() {
    let systems = [
        ("x - y = 2", "2*x + y = 7"),
        ("x + y = 5", "2*x + 2*y = 10"),
        ("x + y = 5", "2*x + 2*y = 3"),
        ("2*x + 3*y - 6 = 0", "x - y - 1 = 0"),
    ];

    for (first, second) in systems {
        println!("{first}  |  {second}");
        match solve_eqs(first, second) {
            Ok(lines) => println!("{}", lines.join("\n")),
            Err(err) => eprintln!("error: {err}"),
        }
        println!();
    }
}
