//! Fixed storage keys, default data, and display sentinels.
//!
//! Key names match earlier deployments so an existing store keeps
//! working without migration.

use chrono::Utc;

use crate::models::Notice;

/// Store entry holding the notice collection.
pub const NOTICES_KEY: &str = "hjnj_notices_v1";
/// Store entry holding the ordered category labels.
pub const CATEGORIES_KEY: &str = "hjnj_categories_v1";
/// Store entry holding the persisted session user.
pub const AUTH_KEY: &str = "hjnj_auth_v1";

/// Synthetic match-everything filter value ("All"). Never stored in the
/// registry; injected only at display time.
pub const ALL_CATEGORIES: &str = "全部";

/// Author label used when a notice is created without a session user.
pub const FALLBACK_AUTHOR: &str = "管理中心";

/// Registry contents when no categories entry exists yet.
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["健康关爱", "心理疏导", "生活福利", "荣誉激励", "家属优待"];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// The two sample notices seeded on first launch (or after a failed
/// load). Timestamps are relative to now so the default sort order is
/// visible immediately: the eight-hour-old notice sorts above the
/// day-old one.
pub fn initial_notices() -> Vec<Notice> {
    let now = Utc::now().timestamp_millis();
    vec![
        Notice {
            id: "1".to_string(),
            title: "关于开展全警年度健康体检的通知".to_string(),
            content: "为切实保障民辅警身体健康，分局决定于本月起分批次开展年度体检。\
                      请各单位按计划表组织人员前往指定医院，体检项目涵盖心血管、脊椎专项检查。"
                .to_string(),
            category: "健康关爱".to_string(),
            created_at: now - 86_400_000,
            author: "政治处".to_string(),
        },
        Notice {
            id: "2".to_string(),
            title: "民警之家心理咨询预约通道开启".to_string(),
            content: "近期基层勤务较重，为缓解同志们心理压力，心理健康中心现开放一对一在线预约服务。\
                      我们承诺保护绝对隐私，提供专业的心理疏导方案。"
                .to_string(),
            category: "心理疏导".to_string(),
            created_at: now - 8 * 3_600_000,
            author: "心理中心".to_string(),
        },
    ]
}
