//! 一次性 flash 消息
//!
//! 变更类 handler 把提示消息排队到 cookie 并重定向；
//! 下一个页面 handler 取出消息（同时删除 cookie）放进页面载荷。

use axum_extra::extract::cookie::{Cookie, CookieJar};

/// flash 消息 cookie 名
pub const FLASH_COOKIE: &str = "stagebook_flash";

/// 排队一条 flash 消息，返回带 Set-Cookie 的 jar
pub fn queue(jar: CookieJar, message: impl Into<String>) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, message.into());
    cookie.set_path("/");
    cookie.set_http_only(true);
    jar.add(cookie)
}

/// 取出并清除待显示的 flash 消息
///
/// 返回的 jar 必须随响应返回，否则删除不会生效，
/// 消息会在后续页面重复显示
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            let mut removal = Cookie::from(FLASH_COOKIE);
            removal.set_path("/");
            (jar.remove(removal), Some(message))
        }
        None => (jar, None),
    }
}
