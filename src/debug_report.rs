use dialrange::{ConflictPair, Fragment, PartitionDetails, RangeSet};

mod ansi {
    const RESET: &str = "\x1b[0m";
    const DIM: &str = "\x1b[2m";
    const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    const GRAY: &str = "\x1b[90m";

    /// Wraps text in ANSI codes, or passes it through when colour is off.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, code: &str) -> String {
            if self.enabled { format!("{code}{}{RESET}", s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }

        pub fn gray(&self, s: impl AsRef<str>) -> String {
            self.paint(s, GRAY)
        }

        /// Section header line.
        pub fn rule(&self, title: &str) -> String {
            self.gray(format!("━━━ {title} ━━━"))
        }
    }
}

pub fn print_partition(set: &RangeSet, details: &PartitionDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    let dropped = if details.duplicates > 0 {
        palette.dim(format!(" ({} duplicate{} dropped)", details.duplicates, plural(details.duplicates)))
    } else {
        String::new()
    };
    let title = format!("⚙  Partitioning {} range{}", details.input, plural(details.input));
    println!("\n{}{}", palette.bold(palette.paint(title, ansi::CYAN)), dropped);

    println!("\n{}", palette.rule("Splits"));
    print_splits(details, &palette);

    println!("\n{}", palette.rule("Owned"));
    let mut any_owned = false;
    for fragment in set.owned() {
        any_owned = true;
        println!("  {}", fmt_fragment(fragment, &palette));
    }
    if !any_owned {
        println!("{}", palette.dim("  No owned fragments"));
    }

    let pairs = set.conflict_pairs();
    if !pairs.is_empty() {
        println!("\n{}", palette.rule("Conflicts"));
        for pair in &pairs {
            print_pair(pair, &palette);
        }
    }

    println!("\n{}", palette.rule("Timing"));
    println!(
        "  Total: {}  │  Splitting: {}  │  Patterns: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.splitting), ansi::CYAN),
        palette.dim(format!("{:?}", details.patterns)),
    );
    println!();
}

fn print_splits(details: &PartitionDetails, palette: &ansi::Palette) {
    if details.splits.is_empty() {
        println!("{}", palette.dim("  No overlaps"));
        return;
    }

    for split in details.splits.iter().take(20) {
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("Round {}:", split.round), ansi::BLUE),
            palette.paint(&split.shared, ansi::YELLOW),
            palette.dim("│"),
            palette.paint(format!("{} / {}", split.kept_owner, split.exception_owner), ansi::CYAN),
            palette.dim(format!("#{}  +{} remainder(s)  {:?}", split.index, split.remainders, split.duration)),
        );
    }
    if details.splits.len() > 20 {
        println!("  {}", palette.dim(format!("... +{} more", details.splits.len() - 20)));
    }
}

fn print_pair(pair: &ConflictPair<'_>, palette: &ansi::Palette) {
    println!(
        "  {} {} {} {}",
        palette.gray(format!("[{}]", pair.index)),
        palette.bold(palette.paint(format!("{}-{}", pair.kept.start(), pair.kept.end()), ansi::YELLOW)),
        palette.dim("│"),
        palette.paint(pair.kept.pattern(), ansi::GREEN),
    );
    println!(
        "      {} {}  {} {}",
        palette.dim("kept:"),
        palette.paint(pair.kept.owner(), ansi::BLUE),
        palette.dim("│ exception:"),
        palette.paint(pair.exception.owner(), ansi::CYAN)
    );
    // Members written in different widths match different strings.
    if pair.exception.pattern() != pair.kept.pattern() {
        println!(
            "      {} {} {}",
            palette.dim("exception as:"),
            palette.paint(format!("{}-{}", pair.exception.start(), pair.exception.end()), ansi::YELLOW),
            palette.paint(pair.exception.pattern(), ansi::GREEN)
        );
    }
}

fn fmt_fragment(fragment: &Fragment, palette: &ansi::Palette) -> String {
    format!(
        "{} {} {} {} {}",
        palette.gray(format!("[{}]", fragment.index())),
        palette.paint(format!("{}-{}", fragment.start(), fragment.end()), ansi::YELLOW),
        palette.paint(fragment.owner(), ansi::BLUE),
        palette.dim("│"),
        palette.paint(fragment.pattern(), ansi::GREEN)
    )
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
