use chrono::{DateTime, Utc};
use odps_common::timestamp::format_gmt;
use odps_ml::codec::decode_resource;
use odps_ml::{ModelResource, OnlineModel, OnlineModelDesc, OnlineStatus, Result};

fn or_na(v: Option<&str>) -> String {
    v.filter(|s| !s.is_empty()).unwrap_or("N/A").to_string()
}

fn time_or_na(v: Option<DateTime<Utc>>) -> String {
    v.as_ref().map(format_gmt).unwrap_or_else(|| "N/A".to_string())
}

fn resource_or_na(v: Option<ModelResource>) -> String {
    match v {
        Some(res) => {
            let mut parts = Vec::new();
            if let Some(cpu) = res.cpu {
                parts.push(format!("cpu={cpu}"));
            }
            if let Some(mem) = res.memory {
                parts.push(format!("memory={mem}MB"));
            }
            if let Some(gpu) = res.gpu {
                parts.push(format!("gpu={gpu}"));
            }
            for (k, v) in &res.other {
                parts.push(format!("{k}={v}"));
            }
            if parts.is_empty() {
                "-".to_string()
            } else {
                parts.join(" ")
            }
        }
        None => "N/A".to_string(),
    }
}

/// Unknown or missing tokens are errors, same as `OnlineModel::status`.
fn status_of(desc: &OnlineModelDesc) -> Result<OnlineStatus> {
    Ok(desc.status.as_deref().unwrap_or_default().parse::<OnlineStatus>()?)
}

/// One reload, then everything is printed from that snapshot.
pub fn print_model_detail(model: &mut OnlineModel) -> Result<()> {
    model.reload()?;
    let desc = model.cached().clone();
    let status = status_of(&desc)?;
    let apply_res = decode_resource(desc.apply_res.as_deref())?;
    let used_res = decode_resource(desc.used_res.as_deref())?;

    println!("\n=== Online Model: {}.{} ===\n", model.project(), model.name());
    println!("  {:<20} {}", "Status:", status);
    println!("  {:<20} {}", "Version:", or_na(desc.version.as_deref()));
    println!("  {:<20} {}", "Owner:", or_na(desc.owner.as_deref()));
    println!("  {:<20} {}", "Created:", time_or_na(desc.create_time));
    println!("  {:<20} {}", "Last Modified:", time_or_na(desc.last_modified_time));
    println!(
        "  {:<20} {}/{} ({})",
        "Offline Model:",
        or_na(desc.offline_model_project.as_deref()),
        or_na(desc.offline_model_name.as_deref()),
        or_na(desc.offline_model_id.as_deref())
    );
    println!(
        "  {:<20} {}",
        "QOS:",
        desc.apply_qos.map(|q| q.to_string()).unwrap_or_else(|| "N/A".into())
    );
    println!(
        "  {:<20} {}",
        "Instances:",
        desc.instance_num.map(|n| n.to_string()).unwrap_or_else(|| "N/A".into())
    );
    println!("  {:<20} {}", "Applied Resource:", resource_or_na(apply_res));
    println!("  {:<20} {}", "Used Resource:", resource_or_na(used_res));
    println!("  {:<20} {}", "Service:", or_na(desc.service_name.as_deref()));
    println!("  {:<20} {}", "Service Tag:", or_na(desc.service_tag.as_deref()));
    println!("  {:<20} {}", "Runtime:", or_na(desc.runtime.as_deref()));
    println!("  {:<20} {}", "A/B Test:", or_na(desc.ab_test.as_deref()));
    println!("  {:<20} {}", "Predict Pipeline:", or_na(desc.predict_desc.as_deref()));
    println!("  {:<20} {}", "Last Failure:", or_na(desc.last_fail_msg.as_deref()));
    println!();
    Ok(())
}
