use reminder_intent::{ExtractionTrace, NodeSummary, ParseReport};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(report: &ParseReport, trace: &ExtractionTrace, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", report.phrase), ansi::CYAN)));
    println!("  {} {}", palette.dim("normalized:"), report.normalized);

    println!("\n{}", palette.paint("━━━ Saturation ━━━", ansi::GRAY));
    print_saturation(trace, &palette);

    println!("\n{}", palette.paint("━━━ Time ━━━", ansi::GRAY));
    print_mentions(report, trace, &palette);

    println!("\n{}", palette.paint("━━━ Intent ━━━", ansi::GRAY));
    print_intent(report, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Extraction: {}  │  Saturation: {}",
        palette.paint(format!("{:?}", report.elapsed), ansi::GREEN),
        palette.paint(format!("{:?}", trace.total), ansi::CYAN),
        palette.dim(format!("{:?}", trace.saturation_total)),
    );
    println!();
}

fn print_saturation(trace: &ExtractionTrace, palette: &ansi::Palette) {
    for pass in &trace.saturation {
        let label = if pass.pass == 0 { "Pass 0 (regex):".to_string() } else { format!("Pass {}:", pass.pass) };

        println!(
            "  {} {}",
            palette.paint(label, ansi::BLUE),
            if pass.produced > 0 {
                palette.paint(format!("✓ {} nodes", pass.produced), ansi::GREEN)
            } else {
                palette.dim(format!("✗ {} nodes", pass.produced))
            }
        );

        for node in pass.samples.iter().take(5) {
            println!("    {}", fmt_node_compact(node, palette));
        }
        if pass.produced > 5 {
            println!("    {}", palette.dim(format!("... +{} more", pass.produced - 5)));
        }
    }
}

fn print_mentions(report: &ParseReport, trace: &ExtractionTrace, palette: &ansi::Palette) {
    if report.mentions.is_empty() {
        println!("{}", palette.dim("  No time expression found"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • Rules were filtered out (check trigger buckets)");
        println!("  • Regex patterns didn't match");
        println!("  • Production or resolution returned None");
        println!("\n{}", palette.dim("  Tip: RUST_LOG=reminder_intent::engine=trace shows rule activation"));
        return;
    }

    for (idx, mention) in report.mentions.iter().enumerate() {
        let body = report.normalized.get(mention.index..mention.end()).unwrap_or("");
        let marker = if idx == 0 { palette.paint("used", ansi::GREEN) } else { palette.dim("ignored") };
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.bold(palette.paint(mention.timestamp.to_string(), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("\"{body}\" {}..{}", mention.index, mention.end()), ansi::YELLOW),
            marker,
        );
        if let Some(node) = trace.selected.get(idx).filter(|node| node.start == mention.index) {
            println!("      {} {}", palette.dim("rule:"), palette.paint(node.rule, ansi::CYAN));
        }
    }
    if let Some(stripped) = &report.stripped {
        println!("  {} {}", palette.dim("stripped:"), stripped);
    }
}

fn print_intent(report: &ParseReport, palette: &ansi::Palette) {
    if let Some(template) = report.template {
        println!("  {} {}", palette.dim("template:"), palette.paint(template, ansi::BLUE));
    }

    match &report.outcome {
        Ok(intent) => {
            println!("  {} {}", palette.dim("recipients:"), palette.paint(intent.recipients.join(" | "), ansi::CYAN));
            println!("  {} {}", palette.dim("action:"), intent.action);
            println!("  {} {}", palette.dim("due:"), palette.paint(intent.due.to_string(), ansi::GREEN));
            println!("  {} {}", palette.dim("confirmation:"), palette.bold(&intent.confirmation));
        }
        Err(err) => {
            println!("  {} {}", palette.paint(err.code(), ansi::RED), palette.dim(err.to_string()));
        }
    }
}

fn fmt_node_compact(node: &NodeSummary, palette: &ansi::Palette) -> String {
    format!(
        "{} {} {}",
        palette.paint(format!("{}..{}", node.start, node.end), ansi::YELLOW),
        palette.paint(node.rule, ansi::BLUE),
        palette.dim(node.preview.clone())
    )
}
