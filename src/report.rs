use requery::{FilterCondition, RequestDescriptor};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
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

pub fn print_descriptor(input: &str, descriptor: &RequestDescriptor, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Endpoint ━━━", ansi::GRAY));
    print_endpoint(descriptor, &palette);

    println!("\n{}", palette.paint("━━━ Query ━━━", ansi::GRAY));
    print_query(descriptor, &palette);

    println!("\n{}", palette.paint("━━━ Filter ━━━", ansi::GRAY));
    print_filter(descriptor, &palette);
    println!();
}

fn print_endpoint(descriptor: &RequestDescriptor, palette: &ansi::Palette) {
    println!(
        "  {} {}",
        palette.dim("resource:"),
        palette.bold(palette.paint(&descriptor.resource_type, ansi::GREEN))
    );
    if let Some(identifier) = &descriptor.identifier {
        println!("  {} {}", palette.dim("identifier:"), palette.paint(identifier, ansi::YELLOW));
    }
    match &descriptor.relationship_type {
        Some(rel) if descriptor.is_relationship_request => {
            println!(
                "  {} {} {}",
                palette.dim("relationship:"),
                palette.paint(rel, ansi::BLUE),
                palette.dim("(relationship request)")
            );
        }
        Some(rel) => println!("  {} {}", palette.dim("related:"), palette.paint(rel, ansi::BLUE)),
        None => {}
    }
}

fn print_query(descriptor: &RequestDescriptor, palette: &ansi::Palette) {
    let query = &descriptor.query;
    let mut printed = false;

    if !query.include.is_empty() {
        println!("  {} {}", palette.dim("include:"), palette.paint(query.include.join(", "), ansi::GREEN));
        printed = true;
    }
    if !query.sort.is_empty() {
        println!("  {} {}", palette.dim("sort:"), palette.paint(query.sort.join(", "), ansi::GREEN));
        printed = true;
    }

    // Sorted for stable output; the descriptor itself is unordered here.
    let mut fields: Vec<_> = query.fields.iter().collect();
    fields.sort_by_key(|(resource, _)| resource.as_str());
    for (resource, list) in fields {
        println!(
            "  {} {}",
            palette.dim(format!("fields[{resource}]:")),
            palette.paint(list.join(", "), ansi::GREEN)
        );
        printed = true;
    }

    let mut page: Vec<_> = query.page.iter().collect();
    page.sort_by_key(|(key, _)| key.as_str());
    for (key, value) in page {
        println!("  {} {}", palette.dim(format!("page[{key}]:")), palette.paint(value, ansi::YELLOW));
        printed = true;
    }

    if !printed {
        println!("{}", palette.dim("  (none)"));
    }
}

fn print_filter(descriptor: &RequestDescriptor, palette: &ansi::Palette) {
    let filter = &descriptor.query.filter;
    if filter.is_empty() {
        println!("{}", palette.dim("  (none)"));
        return;
    }

    print_condition(&filter.condition, "  ", palette);
    for (index, element) in filter.or.iter().enumerate() {
        println!("  {}", palette.paint(format!("or[{index}]:"), ansi::BLUE));
        print_condition(element, "    ", palette);
    }
}

fn print_condition(condition: &FilterCondition, indent: &str, palette: &ansi::Palette) {
    let maps: [(&str, &std::collections::HashMap<String, String>); 7] = [
        ("=", &condition.equals),
        ("like", &condition.like),
        ("not", &condition.not),
        ("lt", &condition.lt),
        ("lte", &condition.lte),
        ("gt", &condition.gt),
        ("gte", &condition.gte),
    ];

    for (operator, map) in maps {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by_key(|(column, _)| column.as_str());
        for (column, value) in entries {
            println!(
                "{indent}{} {} {}",
                palette.paint(column, ansi::CYAN),
                palette.dim(operator),
                palette.bold(palette.paint(value, ansi::GREEN)),
            );
        }
    }
}
