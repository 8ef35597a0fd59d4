//! Endpoint catalog.
//!
//! Paths are relative to the plugin prefix and never carry an origin; the
//! client resolves where they are sent.

/// Plugin namespace every endpoint lives under.
pub const PLUGIN_BASE_PATH: &str = "/plugins/webui_backend";

pub mod auth {
    /// `GET`; succeeds only when the `X-API-Key` header is accepted.
    pub const LOGIN: &str = "auth/login";
    /// `GET`; needs no key.
    pub const HEALTH: &str = "auth/health";
}

pub mod stats {
    pub const OVERVIEW: &str = "stats/overview";
    pub const SYSTEM: &str = "stats/system";
    pub const RESTART: &str = "stats/system/restart";
    pub const SHUTDOWN: &str = "stats/system/shutdown";
    pub const SCHEDULE: &str = "stats/schedule";
    pub const MONTHLY_PLANS: &str = "stats/monthly-plans";
    pub const LLM_STATS: &str = "stats/llm-stats";
    pub const MESSAGE_STATS: &str = "stats/message-stats";
    pub const PLUGINS: &str = "stats/plugins";
    pub const PLUGINS_BY_STATUS: &str = "stats/plugins-by-status";
    pub const COMPONENTS: &str = "stats/components";

    pub fn plugin(name: &str) -> String {
        format!("stats/plugins/{}", urlencoding::encode(name))
    }

    pub fn components_by_type(component_type: &str) -> String {
        format!("stats/components-by-type/{}", urlencoding::encode(component_type))
    }
}

pub mod plugin {
    pub const LIST: &str = "plugin_manager/plugins";

    pub fn detail(name: &str) -> String {
        format!("plugin_manager/plugins/{}", urlencoding::encode(name))
    }

    /// `enable`, `disable`, `reload`, `unload`, `load`, `status`, `components`.
    pub fn action(name: &str, action: &str) -> String {
        format!("plugin_manager/plugins/{}/{}", urlencoding::encode(name), action)
    }

    pub fn delete(name: &str) -> String {
        action(name, "delete")
    }

    pub fn component_action(plugin: &str, component: &str, action: &str) -> String {
        format!(
            "plugin_manager/plugins/{}/components/{}/{}",
            urlencoding::encode(plugin),
            urlencoding::encode(component),
            action
        )
    }
}

/// Percent-encode each segment of a slash-separated path, keeping the
/// separators.
pub fn encode_path(path: &str) -> String {
    path.trim_start_matches('/')
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

pub mod config {
    use super::encode_path;

    pub const LIST: &str = "config/list";
    pub const VALIDATE: &str = "config/validate";

    /// Config paths keep their slashes; the backend route is `{path:path}`.
    pub fn content(path: &str) -> String {
        format!("config/content/{}", encode_path(path))
    }

    pub fn schema(path: &str) -> String {
        format!("config/schema/{}", encode_path(path))
    }

    pub fn save(path: &str) -> String {
        format!("config/save/{}", encode_path(path))
    }

    pub fn update(path: &str) -> String {
        format!("config/update/{}", encode_path(path))
    }

    pub fn backups(path: &str) -> String {
        format!("config/backups/{}", encode_path(path))
    }

    pub fn restore(path: &str) -> String {
        format!("config/restore/{}", encode_path(path))
    }
}

/// Per-plugin configuration files (`config/plugins/<name>/config.toml`).
pub mod plugin_config {
    pub const LIST: &str = "plugin_config/list";

    /// `schema`, `content`, `save`, `update`, `reset`, `backups`, `validate`.
    pub fn action(plugin: &str, action: &str) -> String {
        format!("plugin_config/{}/{}", urlencoding::encode(plugin), action)
    }

    pub fn restore(plugin: &str, backup_name: &str) -> String {
        format!(
            "plugin_config/{}/restore/{}",
            urlencoding::encode(plugin),
            urlencoding::encode(backup_name)
        )
    }
}

/// First-run setup wizard.
pub mod initialization {
    pub const STATUS: &str = "initialization/status";
    pub const BOT_CONFIG: &str = "initialization/bot-config";
    pub const MODEL_CONFIG: &str = "initialization/model-config";
    pub const GIT_CONFIG: &str = "initialization/git-config";
    pub const COMPLETE: &str = "initialization/complete";
    pub const VALIDATE_API_KEY: &str = "initialization/validate-api-key";
    pub const DETECT_GIT: &str = "initialization/detect-git";
}

pub mod git_env {
    pub const STATUS: &str = "git_env/status";
    pub const INSTALL: &str = "git_env/install";
    pub const SET_PATH: &str = "git_env/set-path";
    /// `DELETE`.
    pub const CLEAR_PATH: &str = "git_env/clear-path";
    pub const INSTALL_GUIDE: &str = "git_env/install-guide";
}

pub mod marketplace {
    pub const LIST: &str = "marketplace/list";
    pub const INSTALL: &str = "marketplace/install";
    pub const CHECK_UPDATES: &str = "marketplace/check-updates";

    pub fn detail(plugin_id: &str) -> String {
        format!("marketplace/detail/{}", urlencoding::encode(plugin_id))
    }

    pub fn update(plugin_id: &str) -> String {
        format!("marketplace/update/{}", urlencoding::encode(plugin_id))
    }
}

pub mod setting {
    /// `POST` (multipart) to upload, `DELETE` to remove.
    pub const WALLPAPER: &str = "setting/wallpaper";
    pub const WALLPAPER_IMAGE: &str = "setting/wallpaper/image";
}

pub mod git_update {
    pub const STATUS: &str = "git_update/status";
    pub const INSTALL: &str = "git_update/install";
    pub const CHECK: &str = "git_update/check";
    pub const UPDATE: &str = "git_update/update";
    pub const ROLLBACK: &str = "git_update/rollback";
    pub const SWITCH_BRANCH: &str = "git_update/switch-branch";
    pub const SET_PATH: &str = "git_update/set-path";
    pub const CLEAR_PATH: &str = "git_update/clear-path";
}

pub mod ui_update {
    pub const STATUS: &str = "ui_update/status";
    pub const UPDATE: &str = "ui_update/update";
    pub const BACKUPS: &str = "ui_update/backups";
    pub const ROLLBACK: &str = "ui_update/rollback";
}

pub mod emoji {
    pub const LIST: &str = "emoji/list";
    pub const UPLOAD: &str = "emoji/upload";
    pub const BATCH: &str = "emoji/batch";
    pub const STATS: &str = "emoji/stats";

    pub fn detail(hash: &str) -> String {
        format!("emoji/{}", urlencoding::encode(hash))
    }
}

pub mod expression {
    pub const LIST: &str = "expression/list";
    pub const CREATE: &str = "expression/";
    pub const BATCH_DELETE: &str = "expression/batch-delete";
    pub const STATISTICS: &str = "expression/statistics/overview";

    pub fn detail(id: i64) -> String {
        format!("expression/{}", id)
    }
}

pub mod relationship {
    pub const LIST: &str = "relationship/list";
    pub const STATS: &str = "relationship/stats";
    pub const SEARCH: &str = "relationship/search";
    pub const CACHE_CLEAR: &str = "relationship/cache/clear";

    pub fn person(person_id: &str) -> String {
        format!("relationship/person/{}", urlencoding::encode(person_id))
    }

    pub fn report(person_id: &str) -> String {
        format!("relationship/person/{}/report", urlencoding::encode(person_id))
    }

    pub fn impression(person_id: &str) -> String {
        format!("relationship/person/{}/impression", urlencoding::encode(person_id))
    }

    pub fn points(person_id: &str) -> String {
        format!("relationship/person/{}/points", urlencoding::encode(person_id))
    }
}

pub mod model_stats {
    pub const MODEL_USAGE: &str = "model_stats/model_usage";
    pub const MODEL_OVERVIEW: &str = "model_stats/model_overview";
    pub const PROVIDER_STATS: &str = "model_stats/provider_stats";
    pub const MODULE_STATS: &str = "model_stats/module_stats";
    pub const CHART_DATA: &str = "model_stats/chart_data";

    pub fn model_detail(model_name: &str) -> String {
        format!("model_stats/model_detail/{}", urlencoding::encode(model_name))
    }
}

pub mod log_viewer {
    pub const FILES: &str = "log_viewer/files";
    pub const SEARCH: &str = "log_viewer/search";
    pub const LOGGERS: &str = "log_viewer/loggers";
    pub const STATS: &str = "log_viewer/stats";
    /// Websocket.
    pub const REALTIME: &str = "log_viewer/realtime";
}

pub mod live_chat {
    /// Websocket.
    pub const REALTIME: &str = "live_chat/realtime";
    pub const IMAGE: &str = "live_chat/image";
    pub const EMOJI: &str = "live_chat/emoji";
    pub const STREAMS: &str = "live_chat/streams";
    pub const SEND: &str = "live_chat/send";

    pub fn messages(stream_id: &str) -> String {
        format!("live_chat/messages/{}", urlencoding::encode(stream_id))
    }

    pub fn reply(stream_id: &str, message_id: &str) -> String {
        format!(
            "live_chat/reply/{}/{}",
            urlencoding::encode(stream_id),
            urlencoding::encode(message_id)
        )
    }
}
