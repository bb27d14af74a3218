use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成给定长度的随机代码（去除易混淆字符）
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_charset() {
        let code = generate_random_code(8);
        assert_eq!(code.len(), 8);
        assert!(code.bytes().all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn test_excludes_ambiguous_characters() {
        let code = generate_random_code(256);
        assert!(!code.contains('O'));
        assert!(!code.contains('I'));
        assert!(!code.contains('0'));
        assert!(!code.contains('1'));
    }
}
