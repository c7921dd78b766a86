//! Configured profiles and how loading them went

use super::{Icc, load_config, to_json};
use crate::messages::Messages;
use crate::{GlobalArgs, ProfilesArgs};
use anyhow::Result;
use cmyk_core::IccStatus;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Serialize)]
struct ProfileRow<'a> {
    key: &'a str,
    title: &'a str,
    path: PathBuf,
    exists: bool,
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct Listing<'a> {
    engine: String,
    intent: String,
    profiles_dir: PathBuf,
    status: Option<IccStatus>,
    profiles: Vec<ProfileRow<'a>>,
}

pub fn run(args: ProfilesArgs, global: &GlobalArgs) -> Result<()> {
    let msg = Messages::get(global.lang);
    let config = load_config(global)?;
    let source = config.profile_source();

    let icc = Icc::new(&config);
    let status = if args.check {
        let _ = icc.start(source.clone());
        icc.wait(Duration::from_millis(args.timeout_ms))
    } else {
        icc.status()
    };

    let profiles = config
        .profiles
        .iter()
        .map(|p| {
            let path = source.path_for(p);
            ProfileRow {
                key: &p.key,
                title: &p.title,
                exists: path.is_file(),
                path,
                description: msg
                    .profile_description(&p.key)
                    .or(p.description.as_deref()),
            }
        })
        .collect();

    let listing = Listing {
        engine: config.engine.to_string(),
        intent: config.intent.to_string(),
        profiles_dir: config.profiles_dir.clone(),
        status,
        profiles,
    };

    if args.json {
        println!("{}", to_json(&listing)?);
        return Ok(());
    }

    println!("{}", msg.icc_note);
    println!(
        "engine: {}  intent: {}  dir: {}",
        listing.engine,
        listing.intent,
        listing.profiles_dir.display()
    );
    for row in &listing.profiles {
        let marker = if row.exists { "ok" } else { "missing" };
        println!("  {:<10} {:<14} {:<8} {}", row.key, row.title, marker, row.path.display());
        if let Some(desc) = row.description {
            println!("  {:<10} {desc}", "");
        }
    }
    match &listing.status {
        None if !config.icc_enabled => println!("{}", msg.icc_disabled),
        None => {}
        Some(IccStatus::Ready) => println!("{}", msg.icc_ready),
        Some(IccStatus::Failed(reason)) => println!("{}: {reason}", msg.error_badge),
        Some(IccStatus::Loading) => println!("{}", msg.loading_icc),
        Some(IccStatus::Uninitialized) => {}
    }
    Ok(())
}
