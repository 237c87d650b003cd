//! 表单请求 DTO 定义
//!
//! 所有路由的表单字段结构与服务端校验规则。校验只在创建提交时
//! 生效；编辑提交不做校验（见 DESIGN.md）。

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{ArtistFields, NewShow, VenueFields};

/// 电话号码字符集：数字、连字符、括号、加号、空格
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9\-\+\(\) ]+$").unwrap());

/// HTML 复选框反序列化
///
/// 浏览器勾选时提交 "y"/"on"/"true"/"1"，未勾选时整个键缺失
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(value.as_deref(), Some("y" | "on" | "true" | "1")))
}

/// 空字符串归一化为 None（未填写的可选输入框提交的是空串）
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// 场馆创建/编辑表单
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VenueForm {
    #[validate(length(min = 1, max = 120, message = "This field is required."))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "This field is required."))]
    pub city: String,
    #[validate(length(equal = 2, message = "State must be a 2-letter code."))]
    pub state: String,
    pub address: Option<String>,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number."))]
    pub phone: Option<String>,
    pub image_link: Option<String>,
    #[validate(length(max = 120, message = "Link is too long."))]
    pub facebook_link: Option<String>,
    #[validate(length(min = 1, message = "Please select at least one genre."))]
    #[serde(default)]
    pub genres: Vec<String>,
    #[validate(length(max = 120, message = "Link is too long."))]
    pub website_link: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// 转换为仓储层字段集
    pub fn into_fields(self) -> VenueFields {
        VenueFields {
            name: self.name,
            city: self.city,
            state: self.state,
            address: blank_to_none(self.address),
            phone: blank_to_none(self.phone),
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            genres: self.genres,
            website_link: blank_to_none(self.website_link),
            seeking_talent: self.seeking_talent,
            seeking_description: blank_to_none(self.seeking_description),
        }
    }

    /// 用已有实体预填表单（编辑页 GET）
    pub fn from_venue(venue: &crate::models::Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            genres: venue.genres.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// 艺人创建/编辑表单
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1, max = 120, message = "This field is required."))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "This field is required."))]
    pub city: String,
    #[validate(length(equal = 2, message = "State must be a 2-letter code."))]
    pub state: String,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number."))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Please select at least one genre."))]
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    #[validate(length(max = 120, message = "Link is too long."))]
    pub facebook_link: Option<String>,
    #[validate(length(max = 120, message = "Link is too long."))]
    pub website_link: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// 转换为仓储层字段集
    pub fn into_fields(self) -> ArtistFields {
        ArtistFields {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: blank_to_none(self.phone),
            genres: self.genres,
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            website_link: blank_to_none(self.website_link),
            seeking_venue: self.seeking_venue,
            seeking_description: blank_to_none(self.seeking_description),
        }
    }

    /// 用已有实体预填表单（编辑页 GET）
    pub fn from_artist(artist: &crate::models::Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

/// 演出创建表单
///
/// id 和时间在表单里都是文本输入，先做字段级校验再转换，
/// 保证校验失败能像其他表单一样聚合为一条 flash 消息
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ShowForm {
    #[validate(custom(function = validate_entity_id))]
    pub venue_id: String,
    #[validate(custom(function = validate_entity_id))]
    pub artist_id: String,
    #[validate(custom(function = validate_start_time))]
    pub start_time: String,
}

impl ShowForm {
    /// 转换为仓储层字段集，调用前必须先通过 validate()
    pub fn into_new_show(self) -> Option<NewShow> {
        Some(NewShow {
            venue_id: self.venue_id.trim().parse().ok()?,
            artist_id: self.artist_id.trim().parse().ok()?,
            start_time: parse_start_time(&self.start_time)?,
        })
    }
}

/// 搜索表单
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

fn validate_entity_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().parse::<i64>().is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("entity_id").with_message("A numeric id is required.".into()))
    }
}

fn validate_start_time(value: &str) -> Result<(), ValidationError> {
    if parse_start_time(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("start_time").with_message("A valid datetime is required.".into()))
    }
}

/// 解析演出时间
///
/// 依次尝试 RFC 3339、`YYYY-MM-DD HH:MM:SS` 和 datetime-local
/// 控件的 `YYYY-MM-DDTHH:MM`；无时区的按 UTC 处理
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// 聚合校验错误为单条 flash 文本
///
/// 每个字段一项 "field msg1|msg2"，字段名排序保证输出稳定，
/// 整体渲染为带方括号的列表形式
pub fn aggregate_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let joined = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join("|");
            (field.to_string(), joined)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let items = fields
        .iter()
        .map(|(field, msgs)| format!("'{field} {msgs}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{items}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_venue_form() -> VenueForm {
        VenueForm {
            name: "The Fillmore".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            genres: vec!["Jazz".into(), "Rock".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_venue_form_validation() {
        assert!(valid_venue_form().validate().is_ok());

        let mut invalid = valid_venue_form();
        invalid.name.clear();
        invalid.state = "California".into();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_phone_validation() {
        let mut form = valid_venue_form();
        form.phone = Some("+1 (415) 555-0101".into());
        assert!(form.validate().is_ok());

        form.phone = Some("call me maybe".into());
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_show_form_validation_and_conversion() {
        let form = ShowForm {
            venue_id: "1".into(),
            artist_id: "2".into(),
            start_time: "2026-09-01 20:00:00".into(),
        };
        assert!(form.validate().is_ok());

        let show = form.into_new_show().unwrap();
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.artist_id, 2);

        let bad = ShowForm {
            venue_id: "one".into(),
            artist_id: "".into(),
            start_time: "tomorrow".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }

    #[test]
    fn test_parse_start_time_formats() {
        assert!(parse_start_time("2026-09-01T20:00:00Z").is_some());
        assert!(parse_start_time("2026-09-01 20:00:00").is_some());
        assert!(parse_start_time("2026-09-01T20:00").is_some());
        assert!(parse_start_time("next friday").is_none());
    }

    #[test]
    fn test_aggregate_errors_is_sorted_and_joined() {
        let mut form = valid_venue_form();
        form.name.clear();
        form.state = "XYZ".into();
        let message = aggregate_errors(&form.validate().unwrap_err());

        assert!(message.starts_with('['));
        assert!(message.contains("'name This field is required.'"));
        assert!(message.contains("'state State must be a 2-letter code.'"));
        // name 在 state 之前
        assert!(message.find("name").unwrap() < message.find("state").unwrap());
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let mut form = valid_venue_form();
        form.address = Some("  ".into());
        form.website_link = Some("https://thefillmore.com".into());
        let fields = form.into_fields();
        assert_eq!(fields.address, None);
        assert_eq!(
            fields.website_link.as_deref(),
            Some("https://thefillmore.com")
        );
    }
}
