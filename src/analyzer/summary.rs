//! Narrative summaries of workloads.
//!
//! Reads the same documents the linter sees and describes each workload in
//! a sentence or three: what it runs, how it is exposed through Services,
//! and which PersistentVolumeClaims it mounts. Summaries never fail; a
//! fragment whose inputs are missing is simply left out.

use crate::analyzer::kubehint::extract::{lookup, sequence_at, string_at};
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;

/// Kinds (lowercase, singular) that carry a pod template.
pub const WORKLOAD_KINDS: &[&str] = &[
    "pod",
    "replicaset",
    "daemonset",
    "statefulset",
    "deployment",
    "cronjob",
    "job",
];

/// Summary of one workload document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub document_index: usize,
    pub kind: String,
    pub name: String,
    /// First line is the subject; services and volumes follow when present.
    pub lines: Vec<String>,
}

impl fmt::Display for DocumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                write!(f, "\n  ")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Whether `kind` names a workload. Case-insensitive; a plural `s` is ignored.
pub fn is_workload_kind(kind: &str) -> bool {
    let kind = kind.to_lowercase();
    let singular = kind.strip_suffix('s').unwrap_or(&kind);
    WORKLOAD_KINDS.contains(&singular)
}

/// Summarize every workload in `documents`, in input order.
pub fn summarize_documents(documents: &[Value]) -> Vec<DocumentSummary> {
    documents
        .iter()
        .enumerate()
        .filter(|(_, doc)| string_at(doc, "kind").is_some_and(is_workload_kind))
        .filter_map(|(index, doc)| summarize_workload(index, doc, documents))
        .collect()
}

fn summarize_workload(index: usize, doc: &Value, documents: &[Value]) -> Option<DocumentSummary> {
    let kind = string_at(doc, "kind")?;
    let template = PodTemplate::of(doc)?;
    let name = string_at(doc, "metadata.name").unwrap_or("<unnamed>");
    let replicas = lookup(doc, "spec.replicas")
        .and_then(Value::as_u64)
        .unwrap_or(1);

    let containers = sequence_at(template.spec, "containers");
    let images: Vec<String> = containers
        .iter()
        .map(|container| {
            format!(
                "{} {} of \"{}\"",
                replicas,
                if replicas == 1 { "replica" } else { "replicas" },
                string_at(container, "image").unwrap_or("<no image>")
            )
        })
        .collect();

    let mut lines = vec![format!(
        "A \"{}\" {}, with {}",
        name,
        kind,
        images.join(" and ")
    )];

    let services = describe_services(&template, containers, documents);
    if !services.is_empty() {
        lines.push(services.join(" and "));
    }

    let volumes = describe_volumes(&template, containers, documents);
    if !volumes.is_empty() {
        lines.push(format!("with {}", volumes.join(" and ")));
    }

    Some(DocumentSummary {
        document_index: index,
        kind: kind.to_string(),
        name: name.to_string(),
        lines,
    })
}

/// Pod spec and labels of a workload, wherever its kind keeps them.
struct PodTemplate<'a> {
    spec: &'a Value,
    labels: Option<&'a serde_yaml::Mapping>,
}

impl<'a> PodTemplate<'a> {
    fn of(doc: &'a Value) -> Option<Self> {
        let kind = string_at(doc, "kind")?.to_lowercase();
        let (spec_path, labels_path) = match kind.trim_end_matches('s') {
            "pod" => ("spec", "metadata.labels"),
            "cronjob" => (
                "spec.jobTemplate.spec.template.spec",
                "spec.jobTemplate.spec.template.metadata.labels",
            ),
            _ => ("spec.template.spec", "spec.template.metadata.labels"),
        };

        Some(Self {
            spec: lookup(doc, spec_path).filter(|v| v.is_mapping())?,
            labels: lookup(doc, labels_path).and_then(Value::as_mapping),
        })
    }
}

fn describe_services(template: &PodTemplate<'_>, containers: &[Value], documents: &[Value]) -> Vec<String> {
    let ports: Vec<&Value> = containers
        .iter()
        .flat_map(|c| sequence_at(c, "ports"))
        .collect();
    if ports.is_empty() {
        return Vec::new();
    }

    let mut described = Vec::new();
    for service in documents
        .iter()
        .filter(|d| string_at(d, "kind").is_some_and(|k| k.eq_ignore_ascii_case("service")))
    {
        let Some(service_name) = string_at(service, "metadata.name") else {
            continue;
        };
        if !selects(service, template.labels) || !targets_any(service, &ports) {
            continue;
        }

        let line = match string_at(service, "spec.type") {
            Some("LoadBalancer") | Some("NodePort") => {
                format!("exposed to the internet via \"{}\"", service_name)
            }
            _ => format!(
                "exposed internally (not to the internet) at the DNS address \"{}\"",
                service_name
            ),
        };
        if !described.contains(&line) {
            described.push(line);
        }
    }
    described
}

/// A Service selects a pod when its non-empty selector is a subset of the
/// pod template labels.
fn selects(service: &Value, labels: Option<&serde_yaml::Mapping>) -> bool {
    let Some(selector) = lookup(service, "spec.selector").and_then(Value::as_mapping) else {
        return false;
    };
    let Some(labels) = labels else {
        return false;
    };
    !selector.is_empty() && selector.iter().all(|(k, v)| labels.get(k) == Some(v))
}

fn targets_any(service: &Value, container_ports: &[&Value]) -> bool {
    sequence_at(service, "spec.ports").iter().any(|service_port| {
        let target = lookup(service_port, "targetPort").or_else(|| lookup(service_port, "port"));
        let Some(target) = target else {
            return false;
        };
        container_ports.iter().any(|container_port| match target {
            Value::String(name) => string_at(container_port, "name") == Some(name.as_str()),
            other => lookup(container_port, "containerPort") == Some(other),
        })
    })
}

fn describe_volumes(template: &PodTemplate<'_>, containers: &[Value], documents: &[Value]) -> Vec<String> {
    let mut described = Vec::new();

    for volume in sequence_at(template.spec, "volumes") {
        let (Some(volume_name), Some(claim_name)) = (
            string_at(volume, "name"),
            string_at(volume, "persistentVolumeClaim.claimName"),
        ) else {
            continue;
        };
        let Some(claim) = find_claim(documents, claim_name) else {
            log::debug!("No PersistentVolumeClaim named {} in the input", claim_name);
            continue;
        };
        let size = lookup(claim, "spec.resources.requests.storage").and_then(display_scalar);

        for mount in containers.iter().flat_map(|c| sequence_at(c, "volumeMounts")) {
            if string_at(mount, "name") != Some(volume_name) {
                continue;
            }
            let mount_path = string_at(mount, "mountPath").unwrap_or("<unknown path>");
            described.push(match &size {
                Some(size) => format!("a {} volume \"{}\" mounted at {}", size, claim_name, mount_path),
                None => format!("a volume \"{}\" mounted at {}", claim_name, mount_path),
            });
        }
    }

    described
}

fn find_claim<'a>(documents: &'a [Value], claim_name: &str) -> Option<&'a Value> {
    documents.iter().find(|d| {
        string_at(d, "kind").is_some_and(|k| k.eq_ignore_ascii_case("persistentvolumeclaim"))
            && string_at(d, "metadata.name") == Some(claim_name)
    })
}

fn display_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
