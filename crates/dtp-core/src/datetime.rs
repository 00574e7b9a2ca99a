use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use chrono::{
  NaiveDate,
  Utc
};
use chrono_tz::Tz;
use serde::Deserialize;

const TIMEZONE_CONFIG_FILE: &str =
  "dtp-time.toml";
const TIMEZONE_ENV_VAR: &str =
  "DTP_TIMEZONE";
const TIMEZONE_CONFIG_ENV_VAR: &str =
  "DTP_TIME_CONFIG";
const DEFAULT_PICKER_TIMEZONE: &str =
  "UTC";

#[derive(Debug, Deserialize)]
struct TimezoneConfig {
  timezone: Option<String>,
  time:     Option<TimezoneSection>
}

#[derive(Debug, Deserialize)]
struct TimezoneSection {
  timezone: Option<String>
}

pub fn picker_timezone() -> &'static Tz
{
  static PICKER_TZ: OnceLock<Tz> =
    OnceLock::new();
  PICKER_TZ.get_or_init(
    resolve_picker_timezone
  )
}

#[must_use]
pub fn today() -> NaiveDate {
  Utc::now()
    .with_timezone(picker_timezone())
    .date_naive()
}

fn resolve_picker_timezone() -> Tz {
  if let Ok(raw) =
    std::env::var(TIMEZONE_ENV_VAR)
  {
    if let Some(tz) = parse_timezone(
      &raw,
      TIMEZONE_ENV_VAR
    ) {
      return tz;
    }
  }

  if let Some(path) =
    timezone_config_path()
    && let Some(tz) =
      load_timezone_from_file(&path)
  {
    return tz;
  }

  parse_timezone(
    DEFAULT_PICKER_TIMEZONE,
    "DEFAULT_PICKER_TIMEZONE"
  )
  .unwrap_or_else(|| {
    tracing::error!(
      "failed to parse fallback \
       timezone; using UTC"
    );
    chrono_tz::UTC
  })
}

fn timezone_config_path()
-> Option<PathBuf> {
  if let Ok(raw) = std::env::var(
    TIMEZONE_CONFIG_ENV_VAR
  ) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return Some(PathBuf::from(
        trimmed
      ));
    }
  }

  std::env::current_dir().ok().map(
    |dir| {
      dir.join(TIMEZONE_CONFIG_FILE)
    }
  )
}

fn load_timezone_from_file(
  path: &PathBuf
) -> Option<Tz> {
  if !path.exists() {
    tracing::info!(
      file = %path.display(),
      "timezone config file not found"
    );
    return None;
  }

  let raw = match fs::read_to_string(
    path
  ) {
    | Ok(raw) => raw,
    | Err(err) => {
      tracing::error!(
        file = %path.display(),
        error = %err,
        "failed reading timezone config file"
      );
      return None;
    }
  };

  let parsed = match toml::from_str::<
    TimezoneConfig
  >(&raw)
  {
    | Ok(parsed) => parsed,
    | Err(err) => {
      tracing::error!(
        file = %path.display(),
        error = %err,
        "failed parsing timezone config file"
      );
      return None;
    }
  };

  let timezone =
    parsed.timezone.or_else(|| {
      parsed.time.and_then(|section| {
        section.timezone
      })
    });
  let Some(timezone) = timezone else {
    tracing::warn!(
      file = %path.display(),
      "timezone config had no timezone field"
    );
    return None;
  };

  parse_timezone(
    timezone.as_str(),
    &format!("file:{}", path.display())
  )
}

fn parse_timezone(
  raw: &str,
  source: &str
) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    tracing::warn!(
      source,
      "timezone source was empty"
    );
    return None;
  }

  match trimmed.parse::<Tz>() {
    | Ok(tz) => {
      tracing::info!(
        source,
        timezone = %trimmed,
        "configured picker timezone"
      );
      Some(tz)
    }
    | Err(err) => {
      tracing::error!(
        source,
        timezone = %trimmed,
        error = %err,
        "failed to parse timezone id"
      );
      None
    }
  }
}
