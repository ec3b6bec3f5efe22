use std::fmt;

use log::error;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn next_value<T>(it: &mut std::slice::Iter<'_, std::string::String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it
        .next()
        .unwrap_or_else(|| error_exit(format!("{}: value missing", opt)));
    n.parse()
        .unwrap_or_else(|e| error_exit(format!("{}: {} '{}'", opt, e, n)))
}

pub fn error_exit<T: fmt::Display, U>(t: T) -> U {
    error!("{}", t);
    std::process::exit(1);
}

// 時刻が取得できない場合は0
pub fn unixtime_now() -> u64 {
    use std::time::*;
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

// 直積 いずれかのリストが空の場合は空
pub fn cartesian_product<'a, T>(vv: &'a [Vec<T>]) -> Vec<Vec<&'a T>> {
    let mut res: Vec<Vec<&T>> = vec![vec![]];
    for v in vv {
        let mut next = vec![];
        for prefix in &res {
            for x in v {
                let mut p = prefix.clone();
                p.push(x);
                next.push(p);
            }
        }
        res = next;
    }
    res
}

// 確率表記 (小数点以下1桁, 分母0は"0%")
pub fn percent_string(num: usize, den: usize) -> String {
    if den == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", num as f64 / den as f64 * 100.0)
}

#[test]
fn test_percent_string() {
    assert_eq!(percent_string(3, 0), "0%");
    assert_eq!(percent_string(1, 8), "12.5%");
    assert_eq!(percent_string(4, 4), "100.0%");
}

#[test]
fn test_cartesian_product() {
    let vv = vec![vec![1, 2], vec![3], vec![4, 5]];
    let res = cartesian_product(&vv);
    assert_eq!(res.len(), 4);
    assert_eq!(res[0], vec![&1, &3, &4]);
    assert_eq!(res[3], vec![&2, &3, &5]);
    assert!(cartesian_product(&[vec![1], vec![]]).is_empty());
}

#[test]
fn test_vec_to_string() {
    assert_eq!(vec_to_string(&[1, 2, 3]), "[1, 2, 3]");
    assert_eq!(vec_to_string::<u8>(&[]), "[]");
}
