use std::io::Write;

/// Interactive y/N confirmation on stdin. Defaults to no.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N]: ", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(is_affirmative(&input))
}

fn is_affirmative(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes")
}
