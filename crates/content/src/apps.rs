use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portal_core::{DomainError, DomainResult, Entity, RecordId, find_by_id, position_by_id};

/// Ids of the apps compiled into the portal. They are listed first and are read-only.
pub const BUILTIN_PREFIX: &str = "hardcoded-";

pub fn is_builtin(id: &str) -> bool {
    id.starts_with(BUILTIN_PREFIX)
}

/// A link tile on the homepage application grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(rename = "iconClass", default, skip_serializing_if = "String::is_empty")]
    pub icon_class: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for App {
    fn id(&self) -> &str {
        &self.id
    }
}

fn builtin(id: &str, name: &str, url: &str, description: &str, icon: &str, now: DateTime<Utc>) -> App {
    App {
        id: format!("{BUILTIN_PREFIX}{id}"),
        name: name.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        icon_class: String::new(),
        created_at: now,
        updated_at: now,
    }
}

pub fn builtin_apps(now: DateTime<Utc>) -> Vec<App> {
    vec![
        builtin(
            "car",
            "Záznam služebních jízd",
            "/evidence-aut",
            "Jednoduchý systém pro evidenci a správu jízd služebními vozidly.",
            "fa-car-side",
            now,
        ),
        builtin(
            "lunch",
            "Objednávka obědů",
            "http://ppc-app/pwkweb2/",
            "Portál pro objednávku a přehled firemních obědů",
            "fa-utensils",
            now,
        ),
        builtin(
            "osticket",
            "OSTicket",
            "http://osticket/",
            "Systém technické podpory a hlášení problémů",
            "fa-headset",
            now,
        ),
        builtin(
            "kanboard",
            "Kanboard",
            "http://kanboard/",
            "Správa úkolů a projektů v přehledném kanban stylu",
            "fa-tasks",
            now,
        ),
    ]
}

/// Built-ins first, then the stored apps in insertion order.
pub fn list_apps(stored: &[App], now: DateTime<Utc>) -> Vec<App> {
    let mut all = builtin_apps(now);
    all.extend(stored.iter().cloned());
    all
}

/// Admin form submission (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppForm {
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "iconClass")]
    pub icon_class: String,
}

impl AppForm {
    /// Trimmed copy of the form; name, url and icon class are mandatory.
    pub fn validated(&self) -> DomainResult<AppForm> {
        let form = AppForm {
            name: self.name.trim().to_string(),
            url: self.url.trim().to_string(),
            description: self.description.trim().to_string(),
            icon_class: self.icon_class.trim().to_string(),
        };
        if form.name.is_empty() || form.url.is_empty() || form.icon_class.is_empty() {
            return Err(DomainError::validation("Name, URL, and Icon are required"));
        }
        Ok(form)
    }
}

fn read_only(id: &str, action: &str) -> DomainResult<()> {
    if is_builtin(id) {
        return Err(DomainError::forbidden(format!("Cannot {action} hardcoded app")));
    }
    Ok(())
}

/// Stored app by id. Built-in apps are never returned here.
pub fn get_app<'a>(stored: &'a [App], id: &str) -> DomainResult<&'a App> {
    if is_builtin(id) {
        return Err(DomainError::not_found("App"));
    }
    find_by_id(stored, id).ok_or_else(|| DomainError::not_found("App"))
}

pub fn create_app(stored: &mut Vec<App>, form: &AppForm, now: DateTime<Utc>) -> DomainResult<App> {
    let form = form.validated()?;
    let app = App {
        id: RecordId::generate("app").to_string(),
        name: form.name,
        url: form.url,
        description: form.description,
        icon: String::new(),
        icon_class: form.icon_class,
        created_at: now,
        updated_at: now,
    };
    stored.push(app.clone());
    Ok(app)
}

pub fn update_app(stored: &mut [App], id: &str, form: &AppForm, now: DateTime<Utc>) -> DomainResult<App> {
    read_only(id, "update")?;
    let form = form.validated()?;
    let idx = position_by_id(stored, id).ok_or_else(|| DomainError::not_found("App"))?;

    let app = &mut stored[idx];
    app.name = form.name;
    app.url = form.url;
    app.description = form.description;
    app.icon_class = form.icon_class;
    app.updated_at = now;
    Ok(app.clone())
}

pub fn delete_app(stored: &mut Vec<App>, id: &str) -> DomainResult<App> {
    read_only(id, "delete")?;
    let idx = position_by_id(stored, id).ok_or_else(|| DomainError::not_found("App"))?;
    Ok(stored.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 5, 8, 0, 0).unwrap()
    }

    fn form(name: &str, url: &str, icon: &str) -> AppForm {
        AppForm {
            name: name.to_string(),
            url: url.to_string(),
            description: "  popis ".to_string(),
            icon_class: icon.to_string(),
        }
    }

    #[test]
    fn builtins_come_first() {
        let mut stored = Vec::new();
        create_app(&mut stored, &form("Wiki", "http://wiki/", "fa-book"), now()).unwrap();

        let all = list_apps(&stored, now());
        assert_eq!(all.len(), 5);
        assert!(all[..4].iter().all(|a| is_builtin(&a.id)));
        assert_eq!(all[0].id, "hardcoded-car");
        assert_eq!(all[4].name, "Wiki");
    }

    #[test]
    fn create_trims_and_assigns_id() {
        let mut stored = Vec::new();
        let app = create_app(&mut stored, &form("  Wiki ", " http://wiki/ ", "fa-book"), now()).unwrap();
        assert!(app.id.starts_with("app_"));
        assert_eq!(app.name, "Wiki");
        assert_eq!(app.url, "http://wiki/");
        assert_eq!(app.description, "popis");
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut stored = Vec::new();
        let err = create_app(&mut stored, &form("Wiki", "", "fa-book"), now()).unwrap_err();
        assert_eq!(err.to_string(), "Name, URL, and Icon are required");
        let err = create_app(&mut stored, &form("Wiki", "http://wiki/", "  "), now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(stored.is_empty());
    }

    #[test]
    fn builtins_are_read_only() {
        let mut stored = Vec::new();
        let f = form("X", "http://x/", "fa-x");
        assert!(matches!(update_app(&mut stored, "hardcoded-car", &f, now()), Err(DomainError::Forbidden(_))));
        assert!(matches!(delete_app(&mut stored, "hardcoded-kanboard"), Err(DomainError::Forbidden(_))));
        assert!(matches!(get_app(&stored, "hardcoded-car"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn update_and_delete_stored_app() {
        let mut stored = Vec::new();
        let app = create_app(&mut stored, &form("Wiki", "http://wiki/", "fa-book"), now()).unwrap();

        let later = now() + chrono::Duration::hours(1);
        let updated = update_app(&mut stored, &app.id, &form("Docs", "http://docs/", "fa-file"), later).unwrap();
        assert_eq!(updated.name, "Docs");
        assert_eq!(updated.created_at, now());
        assert_eq!(updated.updated_at, later);
        assert_eq!(get_app(&stored, &app.id).unwrap().url, "http://docs/");

        delete_app(&mut stored, &app.id).unwrap();
        assert!(stored.is_empty());
        assert!(matches!(delete_app(&mut stored, &app.id), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn icon_class_uses_camel_case_on_the_wire() {
        let mut stored = Vec::new();
        let app = create_app(&mut stored, &form("Wiki", "http://wiki/", "fa-book"), now()).unwrap();
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["iconClass"], "fa-book");
        assert!(json.get("icon").is_none());
    }
}
