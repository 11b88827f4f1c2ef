//! Guard for byte buffers that are about to be treated as text.
//!
//! Re-exports the validator from `textguard_encoding`.

pub use textguard_encoding::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_validator_across_threads() {
        let validator = Validator::default();
        let buffers: Arc<Vec<Vec<u8>>> = Arc::new(vec![
            b"AB".to_vec(),
            vec![0xC3, 0xA9],
            vec![0xC3],
            vec![0xE2, 0x82, 0xAC],
            vec![0x80],
            vec![0xF0, 0x90, 0x80, 0x80],
        ]);
        let expected = [true, true, false, true, false, true];

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let buffers = Arc::clone(&buffers);
                thread::spawn(move || {
                    buffers
                        .iter()
                        .map(|b| validator.validate(Some(b.as_slice())))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_facade_exports() {
        assert!(is_valid_utf8(None));
        assert!(is_valid_utf8_until_nul(Some(b"ok\0\xFF".as_slice())));
        assert_eq!(cluster_len(0xE2), Some(3));
        assert!(ensure_valid_utf8(Some(b"\xC3".as_slice())).is_err());
    }
}
