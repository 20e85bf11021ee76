use crate::analyzer::kubehint::RuleRegistry;

/// Print the built-in rules, one kind per line.
pub fn handle_rules() {
    print!("{}", render_rules(&RuleRegistry::with_builtins()));
}

fn render_rules(registry: &RuleRegistry) -> String {
    registry
        .entries()
        .into_iter()
        .map(|(kind, versions)| {
            let versions: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
            format!("{}: {}\n", kind, versions.join(", "))
        })
        .collect()
}
