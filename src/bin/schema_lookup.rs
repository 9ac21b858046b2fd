//! Look up one schema document from the command line.
//!
//! Builds a resolver from an optional catalog file and any number of
//! resource directories, resolves a single category/name pair, and prints
//! the document text (or a JSON record with `--json`). Exits non-zero when
//! nothing is found so shell callers can branch on the status.

use anyhow::{Context, Result, bail};
use schema_resolver::{
    CatalogRepository, JsonSchemaResolver, SchemaCategory, SchemaResolver, SearchPath,
};
use serde::Serialize;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SCHEMA_RESOLVER_LOG";

fn main() {
    init_logging();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<bool> {
    let args = CliArgs::parse(env::args_os().skip(1))?;

    if args.candidates {
        if args.category != SchemaCategory::Model {
            bail!("--candidates only applies to the model category");
        }
        for path in SchemaResolver::model_candidate_paths(&args.name) {
            println!("{path}");
        }
        return Ok(true);
    }

    let resolver = build_resolver(&args)?;
    let schema = lookup(&resolver, args.category, &args.name);

    if args.json {
        let record = LookupRecord {
            category: args.category,
            name: &args.name,
            found: schema.is_some(),
            schema: schema.as_deref(),
        };
        println!("{}", serde_json::to_string(&record)?);
    } else if let Some(text) = &schema {
        print!("{text}");
        if !text.ends_with('\n') {
            println!();
        }
    } else {
        eprintln!("no {} schema found for '{}'", args.category, args.name);
    }
    Ok(schema.is_some())
}

fn build_resolver(args: &CliArgs) -> Result<SchemaResolver> {
    let mut builder = SchemaResolver::builder();
    if let Some(path) = &args.catalog {
        let repository = CatalogRepository::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?;
        builder = builder.context(Arc::new(repository));
    }
    if !args.resource_dirs.is_empty() {
        builder = builder.loader(Arc::new(SearchPath::from_dirs(args.resource_dirs.clone())));
    }
    if args.no_default_path {
        builder = builder.fallback(Arc::new(SearchPath::new()));
    }
    Ok(builder.build())
}

fn lookup(resolver: &SchemaResolver, category: SchemaCategory, name: &str) -> Option<String> {
    match category {
        SchemaCategory::Component => resolver.component_json_schema(name),
        SchemaCategory::DataFormat => resolver.data_format_json_schema(name),
        SchemaCategory::Language => resolver.language_json_schema(name),
        SchemaCategory::Transformer => resolver.transformer_json_schema(name),
        SchemaCategory::DevConsole => resolver.dev_console_json_schema(name),
        SchemaCategory::PojoBean => resolver.pojo_bean_json_schema(name),
        SchemaCategory::Other => resolver.other_json_schema(name),
        SchemaCategory::Model => resolver.model_json_schema(name),
        SchemaCategory::Main => resolver.main_json_schema(),
    }
}

#[derive(Serialize)]
struct LookupRecord<'a> {
    category: SchemaCategory,
    name: &'a str,
    found: bool,
    schema: Option<&'a str>,
}

#[derive(Debug)]
struct CliArgs {
    category: SchemaCategory,
    name: String,
    catalog: Option<PathBuf>,
    resource_dirs: Vec<PathBuf>,
    no_default_path: bool,
    json: bool,
    candidates: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut catalog: Option<PathBuf> = None;
        let mut resource_dirs = Vec::new();
        let mut no_default_path = false;
        let mut json = false;
        let mut candidates = false;
        let mut positional = Vec::new();

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog" => {
                    if catalog.is_some() {
                        bail!("--catalog may only be provided once");
                    }
                    catalog = Some(PathBuf::from(next_value(&mut args, "--catalog")?));
                }
                "--resource-dir" => {
                    resource_dirs.push(PathBuf::from(next_value(&mut args, "--resource-dir")?));
                }
                "--no-default-path" => no_default_path = true,
                "--json" => json = true,
                "--candidates" => candidates = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other if other.starts_with("--") => bail!("unknown flag: {other}"),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let Some(raw_category) = positional.next() else {
            bail!(usage());
        };
        let category = SchemaCategory::parse(&raw_category).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown category '{raw_category}' (expected {})",
                SchemaCategory::ALL
                    .iter()
                    .map(SchemaCategory::as_str)
                    .collect::<Vec<_>>()
                    .join("|")
            )
        })?;
        let name = positional.next().unwrap_or_default();
        if positional.next().is_some() {
            bail!("expected at most a category and a name");
        }
        if name.is_empty() && category != SchemaCategory::Main {
            bail!("a name is required for the {category} category");
        }

        Ok(CliArgs {
            category,
            name,
            catalog,
            resource_dirs,
            no_default_path,
            json,
            candidates,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: schema-lookup [--catalog FILE] [--resource-dir DIR]... [--no-default-path] [--json] [--candidates] <category> [name]\n\
Resolves one schema document and prints it. Categories: component, dataformat, language, transformer, dev-console, bean, other, model, main.\n\
The default search path comes from SCHEMA_RESOLVER_PATH; logging is controlled by SCHEMA_RESOLVER_LOG.\n"
}

fn print_usage() {
    print!("{}", usage());
}
