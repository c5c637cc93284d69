use chrono::Utc;

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}
