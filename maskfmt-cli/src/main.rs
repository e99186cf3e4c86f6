use maskfmt_core::utils::*;

fn main() {
    println!("----------------------------------------------------");
    println!("███    ███  █████  ███████ ██   ██ ███████ ███    ███ ████████");
    println!("████  ████ ██   ██ ██      ██  ██  ██      ████  ████    ██   ");
    println!("██ ████ ██ ███████ ███████ █████   █████   ██ ████ ██    ██   ");
    println!("██  ██  ██ ██   ██      ██ ██  ██  ██      ██  ██  ██    ██   ");
    println!("██      ██ ██   ██ ███████ ██   ██ ██      ██      ██    ██   ");
    println!("                    VERSION:  0.1.0                 ");
    println!("----------------------------------------------------");

    loop {
        let template = Terminal::ask("Input a mask template (# marks a slot, 'quit' to exit):");
        if template.answer.eq_ignore_ascii_case("quit") {
            break;
        }

        let value_type = loop {
            let input = Terminal::ask("Value type (number/text):");
            match input.answer.parse::<ValueType>() {
                Ok(t) => break t,
                Err(e) => eprintln!("{}", e),
            }
        };

        let masked = Terminal::ask_masked("Input the value to mask:", &template.answer, value_type);
        println!("{}", masked.answer);
        println!();
    }
}
