use fieldmap::{flatten, populate, Mapping, Record, Value};

use super::config::Effective;
use super::error::DemoError;
use super::student::Student;

/// Result of one demo pass.
pub struct Outcome {
    pub original: Student,
    pub mapping: Mapping,
    pub restored: Student,
}

pub fn run(args: &Effective) -> Result<(), DemoError> {
    let outcome = demonstrate(args)?;

    println!("{}", format_record(&outcome.original));
    if args.json {
        println!("{}", serde_json::to_string(&outcome.mapping)?);
    } else {
        println!("{}", format_mapping(&outcome.mapping));
    }
    println!("{}", format_record(&outcome.restored));

    Ok(())
}

/// Flatten a student, inject the private `comment` key, populate a fresh one.
pub fn demonstrate(args: &Effective) -> Result<Outcome, DemoError> {
    let original = Student::new(
        args.name.clone(),
        args.age,
        args.average_mark,
        args.comment.clone(),
    );

    let mut mapping = flatten(&original)?;
    tracing::info!(fields = mapping.len(), "record flattened");

    let shown = mapping.clone();
    mapping.insert("comment".to_string(), Value::from(original.comment()));

    let mut restored = Student::default();
    populate(&mut restored, mapping)?;
    tracing::info!(
        comment_set = !restored.comment().is_empty(),
        "record populated"
    );

    Ok(Outcome {
        original,
        mapping: shown,
        restored,
    })
}

/// `map[k1:v1 k2:v2]` with keys sorted.
pub fn format_mapping(mapping: &Mapping) -> String {
    let mut entries: Vec<_> = mapping.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let body: Vec<String> = entries.iter().map(|(k, v)| format!("{k}:{v}")).collect();
    format!("map[{}]", body.join(" "))
}

/// `{field:value ...}` in declaration order, private fields included.
pub fn format_record(record: &dyn Record) -> String {
    let body: Vec<String> = record
        .describe()
        .into_iter()
        .map(|d| match d.value {
            Some(v) => format!("{}:{v}", d.name),
            None => format!("{}:<{}>", d.name, d.kind),
        })
        .collect();
    format!("{{{}}}", body.join(" "))
}
