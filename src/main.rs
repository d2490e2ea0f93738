use anyhow::Result;
use tracing::{info, Level};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("verinfo v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();

    let mut json = false;
    let mut path: Option<String> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json = true,
            other if path.is_none() => path = Some(other.to_string()),
            other => {
                eprintln!("ERROR: unexpected argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    let path = match path {
        Some(path) => path,
        None => {
            eprintln!("Usage: {} <path-to-image> [--json]", args[0]);
            std::process::exit(1);
        }
    };

    run(&path, json)
}

#[cfg(windows)]
fn run(path: &str, json: bool) -> Result<()> {
    use serde::Serialize;
    use verinfo::{resource, TranslationId, VersionError, VersionInfo};

    #[derive(Serialize)]
    struct StringTable {
        translation: String,
        language: u16,
        code_page: u16,
        values: Vec<(String, String)>,
    }

    #[derive(Serialize)]
    struct Report {
        file: String,
        file_version: Option<String>,
        product_version: Option<String>,
        translations: Vec<StringTable>,
    }

    const KNOWN_ITEMS: [&str; 9] = [
        resource::COMPANY_NAME,
        resource::FILE_DESCRIPTION,
        resource::FILE_VERSION,
        resource::LEGAL_COPYRIGHT,
        resource::LEGAL_TRADEMARKS,
        resource::ORIGINAL_FILENAME,
        resource::PRODUCT_VERSION,
        resource::PRIVATE_BUILD,
        resource::SPECIAL_BUILD,
    ];

    fn optional<T>(result: Result<T, VersionError>) -> Result<Option<T>, VersionError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn string_table(
        info: &VersionInfo,
        translation: TranslationId,
    ) -> Result<StringTable, VersionError> {
        let mut values = Vec::new();
        for item in KNOWN_ITEMS {
            if let Some(value) = optional(info.string_value(translation, item))? {
                values.push((item.to_string(), value));
            }
        }
        Ok(StringTable {
            translation: translation.to_string(),
            language: translation.language(),
            code_page: translation.code_page(),
            values,
        })
    }

    info!("reading version resource of {}", path);
    let info = VersionInfo::from_file(path)?;

    let fixed = optional(info.fixed_info())?;
    let translations = optional(info.translations())?.unwrap_or_default();

    let report = Report {
        file: path.to_string(),
        file_version: fixed.map(|f| f.file_version_string()),
        product_version: fixed.map(|f| f.product_version_string()),
        translations: translations
            .into_iter()
            .map(|t| string_table(&info, t))
            .collect::<Result<_, _>>()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match (&report.file_version, &report.product_version) {
        (Some(file), Some(product)) => {
            println!("File version:    {}", file);
            println!("Product version: {}", product);
        }
        _ => println!("No fixed version record"),
    }
    for table in &report.translations {
        println!(
            "\nTranslation {} (language 0x{:04x}, code page {})",
            table.translation, table.language, table.code_page
        );
        for (item, value) in &table.values {
            println!("  {:<17} {}", item, value);
        }
    }

    Ok(())
}

#[cfg(not(windows))]
fn run(_path: &str, _json: bool) -> Result<()> {
    anyhow::bail!("version resources can only be queried on Windows");
}
