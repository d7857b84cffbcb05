// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod public_api_tests {
    use rampart_eax::omac::Domain;
    use rampart_eax::{EaxError, ctr, decrypt, encrypt, omac, tagged_omac};
    use rampart_util::hex_to_bytes;

    const ZERO: [u8; 16] = [0u8; 16];

    #[test]
    fn test_golden_empty_input() {
        let sealed = encrypt(&ZERO, &ZERO, &[], &[], 16).expect("Failed to encrypt(..)");

        assert!(sealed.ciphertext.is_empty());
        assert_eq!(
            sealed.tag.as_slice(),
            &hex_to_bytes("d62fae4e69f26b2ad690c1a9a987dc81")[..]
        );
    }

    #[test]
    fn test_golden_single_zero_block_roundtrip() {
        let sealed = encrypt(&ZERO, &ZERO, &[], &ZERO, 16).expect("Failed to encrypt(..)");

        assert_eq!(
            sealed.ciphertext,
            hex_to_bytes("b75347ae3bb0f93f6d57b7eaf9abcca0")
        );
        assert_eq!(
            sealed.tag.as_slice(),
            &hex_to_bytes("669d353c7ae0b76ed580ce97e77b7b01")[..]
        );

        let plaintext = decrypt(&ZERO, &ZERO, &[], &sealed.ciphertext, sealed.tag.as_slice())
            .expect("Failed to decrypt(..)");
        assert_eq!(plaintext, ZERO);
    }

    #[test]
    fn test_encrypt_invalid_key_length() {
        let result = encrypt(&[0u8; 24], &ZERO, &[], b"data", 16);
        assert!(matches!(result, Err(EaxError::InvalidKeyLength { got: 24 })));
    }

    #[test]
    fn test_decrypt_invalid_key_length() {
        let result = decrypt(&[0u8; 8], &ZERO, &[], b"data", &[0u8; 16]);
        assert_eq!(result, Err(EaxError::InvalidKeyLength { got: 8 }));
    }

    #[test]
    fn test_encrypt_invalid_tag_length() {
        let result = encrypt(&ZERO, &ZERO, &[], b"data", 32);
        assert!(matches!(result, Err(EaxError::InvalidTagLength { got: 32 })));
    }

    #[test]
    fn test_decrypt_wrong_key_fails_authentication() {
        let sealed = encrypt(&ZERO, &ZERO, b"hdr", b"data", 16).expect("Failed to encrypt(..)");

        let result = decrypt(&[1u8; 16], &ZERO, b"hdr", &sealed.ciphertext, sealed.tag.as_slice());
        assert_eq!(result, Err(EaxError::AuthenticationFailed));
    }

    #[test]
    fn test_omac_matches_cmac_vector() {
        let message: Vec<u8> = (0..16).collect();
        let mac = omac(&ZERO, &message).expect("Failed to omac(..)");

        assert_eq!(&mac[..], &hex_to_bytes("8a57896f795cb6abf6867dad41a5fb15")[..]);
    }

    #[test]
    fn test_omac_invalid_key_length() {
        assert_eq!(
            omac(&[0u8; 17], b"x"),
            Err(EaxError::InvalidKeyLength { got: 17 })
        );
    }

    #[test]
    fn test_tagged_omac_domains() {
        let n = tagged_omac(&ZERO, Domain::Nonce, b"domain").expect("Failed to tagged_omac(..)");
        let h = tagged_omac(&ZERO, Domain::Header, b"domain").expect("Failed to tagged_omac(..)");
        let c =
            tagged_omac(&ZERO, Domain::Ciphertext, b"domain").expect("Failed to tagged_omac(..)");

        assert_ne!(n, h);
        assert_ne!(h, c);
        assert_ne!(n, c);
    }

    #[test]
    fn test_ctr_is_self_inverse_and_keeps_counter() {
        let initial = [0xfe; 16];
        let data = b"counter mode keeps length".to_vec();

        let encrypted = ctr(&ZERO, &initial, &data).expect("Failed to ctr(..)");
        assert_eq!(encrypted.len(), data.len());
        assert_ne!(encrypted, data);

        let decrypted = ctr(&ZERO, &initial, &encrypted).expect("Failed to ctr(..)");
        assert_eq!(decrypted, data);
        assert_eq!(initial, [0xfe; 16]);
    }

    #[test]
    fn test_ctr_empty_input() {
        let out = ctr(&ZERO, &ZERO, &[]).expect("Failed to ctr(..)");
        assert!(out.is_empty());
    }
}
