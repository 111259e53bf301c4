use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_banner() {
    box_top("Passforge");
    box_line_center("Password generator");
    box_line_center("Esc: quit | Ctrl+U: clear input");
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Password generator with guaranteed class coverage");
    box_line("");
    box_line("Every selected character class contributes at least one");
    box_line("character; the rest are drawn from all selected classes and");
    box_line("the result is shuffled.");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments (and no saved defaults),");
    box_line("     or with -i. Prompts for length and character classes.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5).");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 8 to 128 (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --digits", "Include digits 0-9");
    box_opt("      --lower", "Include lower-case letters");
    box_opt("      --upper", "Include upper-case letters");
    box_opt("      --special", "Include special characters");
    box_opt("      --no-special", "Leave special characters out");
    box_opt("      --special-chars <CHARS>", "Override the special character set");
    box_line("   With none of the class flags, all four classes are used.");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: passwords.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_line("");
    box_line(" Randomness:");
    box_opt("  -u, --urandom", "Use the OS random source instead of hardware entropy");
    box_opt("      --seed <N>", "Seeded generator for reproducible output");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --save", "Save the given flags as defaults");
    box_opt("  -d, --default", "Ignore saved defaults");
    box_opt("  -i, --interactive", "Prompt for length and classes");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge -l 20 -n 3           Three passwords, 20 characters each");
    box_line("  passforge -l 12 --digits       12-digit PIN");
    box_line("  passforge --lower --upper -b   Letters only, to clipboard");
    box_line("  passforge -l 24 -s             Save length 24 as default");
    box_line("");
    box_bottom();
    println!();
}
