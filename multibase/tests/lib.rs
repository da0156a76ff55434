// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::thread;

use matches::assert_matches;
use rand::Rng;

use rust_multibase::Base::*;
use rust_multibase::{
    decode, decode_raw, encode, encode_raw, try_decode, try_decode_any, Base, MultibaseError,
};

#[test]
fn test_bases_code() {
    assert_eq!(Base2.code(), '0');
    assert_eq!(Identity.code(), '\0');
    assert_eq!(Base58Flickr.code(), 'Z');
}

#[test]
fn test_bases_from_code() {
    assert_eq!(Base::from_code('0').unwrap(), Base2);
    assert_eq!(Base::from_code('U').unwrap(), Base64UrlPad);
    assert_eq!(Base::from_code('L'), Err(MultibaseError::UnknownBase('L')));
}

#[test]
fn test_prefixes_are_unique() {
    for (i, a) in Base::ALL.iter().enumerate() {
        for b in &Base::ALL[i + 1..] {
            assert_ne!(a.code(), b.code(), "{} and {} share a prefix", a, b);
        }
    }
}

#[test]
fn test_round_trip() {
    let slices: &[&[u8]] = &[
        b"helloworld",
        b"we all want decentralization",
        b"zdj7WfBb6j58iSJuAzDcSZgy2SxFhdpJ4H87uvMpfyN6hRGyH",
        b"\x00\x00leading zeros",
        b"\x00",
    ];

    for base in Base::ALL {
        for s in slices {
            assert_eq!(
                decode(encode(*base, s).unwrap()).unwrap(),
                (*base, s.to_vec()),
                "{}",
                base
            );
        }
    }

    let val = vec![1, 2, 3, 98, 255, 255, 255];
    assert_eq!(
        decode(encode(Base64Url, &val).unwrap()).unwrap(),
        (Base64Url, val)
    )
}

#[test]
fn test_random_round_trip() {
    let mut rng = rand::thread_rng();
    for base in Base::ALL {
        let len = rng.gen_range(16, 256);
        let buf: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let encoded = encode_raw(*base, &buf).unwrap();
        assert_eq!(decode_raw(*base, &encoded).unwrap(), buf, "{}", base);

        let encoded = encode(*base, &buf).unwrap();
        assert_eq!(decode(&encoded).unwrap(), (*base, buf), "{}", base);
    }
}

#[test]
fn test_encode() {
    let id = b"Decentralize everything!!";

    assert_eq!(
        encode(Base16Lower, id).unwrap(),
        "f446563656e7472616c697a652065766572797468696e672121"
    );

    assert_eq!(
        encode(Base16Lower, String::from_utf8(id.to_vec()).unwrap()).unwrap(),
        "f446563656e7472616c697a652065766572797468696e672121"
    );

    assert_eq!(
        encode(Base32Lower, id).unwrap(),
        "birswgzloorzgc3djpjssazlwmvzhs5dinfxgoijb"
    );

    assert_eq!(
        encode(Base58Btc, id).unwrap(),
        "zUXE7GvtEk8XTXs1GF8HSGbVA9FCX9SEBPe"
    );

    let id2 = b"yes mani !";

    assert_eq!(
        encode(Base2, id2).unwrap(),
        "001111001011001010111001100100000011011010110000101101110011010010010000000100001"
    );
    assert_eq!(encode(Base8, id2).unwrap(), "7171312714403326055632220041");
    assert_eq!(encode(Base10, id2).unwrap(), "9573277761329450583662625");
    assert_eq!(encode(Base16Lower, id2).unwrap(), "f796573206d616e692021");
    assert_eq!(encode(Base58Flickr, id2).unwrap(), "Z7Pznk19XTTzBtx");
    assert_eq!(encode(Base58Btc, id2).unwrap(), "z7paNL19xttacUY");
}

#[test]
fn test_encode_empty_input() {
    assert_eq!(encode(Base2, b""), Err(MultibaseError::MissingInput));
    assert_eq!(encode_raw(Base58Btc, Vec::<u8>::new()), Err(MultibaseError::MissingInput));
}

#[test]
fn preserves_leading_zeroes() {
    let id2 = b"\x00\x00\x00yes mani !";

    assert_eq!(encode(Base2, id2).unwrap(), "000000000000000000000000001111001011001010111001100100000011011010110000101101110011010010010000000100001");
    assert_eq!(encode(Base8, id2).unwrap(), "7000171312714403326055632220041");
    assert_eq!(encode(Base10, id2).unwrap(), "9000573277761329450583662625");
    assert_eq!(encode(Base16Upper, id2).unwrap(), "F000000796573206D616E692021");
    assert_eq!(encode(Base16Lower, id2).unwrap(), "f000000796573206d616e692021");
    assert_eq!(encode(Base32Upper, id2).unwrap(), "BAAAAA6LFOMQG2YLONEQCC");
    assert_eq!(encode(Base32PadUpper, id2).unwrap(), "CAAAAA6LFOMQG2YLONEQCC===");
    assert_eq!(encode(Base58Flickr, id2).unwrap(), "Z1117Pznk19XTTzBtx");
    assert_eq!(encode(Base58Btc, id2).unwrap(), "z1117paNL19xttacUY");
    assert_eq!(encode(Base64, id2).unwrap(), "mAAAAeWVzIG1hbmkgIQ");
    assert_eq!(encode(Base64Pad, id2).unwrap(), "MAAAAeWVzIG1hbmkgIQ==");
    assert_eq!(encode(Base64Url, id2).unwrap(), "uAAAAeWVzIG1hbmkgIQ");
    assert_eq!(encode(Base64UrlPad, id2).unwrap(), "UAAAAeWVzIG1hbmkgIQ==");

    let (base, decoded) = decode("z1117paNL19xttacUY").unwrap();
    assert_eq!(base, Base58Btc);
    assert_eq!(&decoded, id2);

    let (base, decoded) = decode("9000573277761329450583662625").unwrap();
    assert_eq!(base, Base10);
    assert_eq!(&decoded, id2);
}

#[test]
fn test_decode() {
    let id = b"Decentralize everything!!";

    assert_eq!(
        decode("f446563656e7472616c697a652065766572797468696e672121").unwrap(),
        (Base16Lower, id.to_vec())
    );

    assert_eq!(
        decode("f446563656e7472616c697a652065766572797468696e672121".to_string()).unwrap(),
        (Base16Lower, id.to_vec())
    );

    assert_eq!(
        decode("zUXE7GvtEk8XTXs1GF8HSGbVA9FCX9SEBPe").unwrap(),
        (Base58Btc, id.to_vec())
    );

    let id2 = b"yes mani !";

    assert_eq!(
        decode("001111001011001010111001100100000011011010110000101101110011010010010000000100001")
            .unwrap(),
        (Base2, id2.to_vec())
    );
    assert_eq!(
        decode("7171312714403326055632220041").unwrap(),
        (Base8, id2.to_vec())
    );
    assert_eq!(
        decode("9573277761329450583662625").unwrap(),
        (Base10, id2.to_vec())
    );
    assert_eq!(
        decode("Z7Pznk19XTTzBtx").unwrap(),
        (Base58Flickr, id2.to_vec())
    );

    assert_eq!(decode("mZg").unwrap(), (Base64, b"f".to_vec()));
    assert_eq!(decode("MZg==").unwrap(), (Base64Pad, b"f".to_vec()));
    assert_eq!(decode("uZg").unwrap(), (Base64Url, b"f".to_vec()));
    assert_eq!(decode("UZg==").unwrap(), (Base64UrlPad, b"f".to_vec()));
}

#[test]
fn test_decode_errors() {
    assert_eq!(decode(""), Err(MultibaseError::MissingInput));
    assert_eq!(decode("z"), Err(MultibaseError::MissingInput));
    assert_eq!(decode("L1111"), Err(MultibaseError::UnknownBase('L')));
    assert_eq!(decode("ø"), Err(MultibaseError::UnknownBase('ø')));
    assert!(decode("099").is_err());
    assert_eq!(
        decode("099999999"),
        Err(MultibaseError::InvalidCharacter {
            character: '9',
            position: 0
        })
    );
    assert_eq!(
        decode("z7pa_L19xttacUY"),
        Err(MultibaseError::InvalidCharacter {
            character: '_',
            position: 3
        })
    );
    assert_matches!(decode("MZg"), Err(MultibaseError::InvalidBaseString(_)));

    assert_eq!(decode_raw(Identity, ""), Err(MultibaseError::MissingInput));
    // wrong case is a different base
    assert_matches!(
        decode_raw(Base16Lower, "6F"),
        Err(MultibaseError::InvalidCharacter { character: 'F', .. })
    );
}

#[test]
fn test_try_decode() {
    assert_eq!(try_decode(""), None);
    assert_eq!(try_decode("ø"), None);
    assert_eq!(try_decode("099"), None);
    assert_eq!(
        try_decode("birswgzloorzgc3djpjssazlwmvzhs5dinfxgoijb"),
        Some((Base32Lower, b"Decentralize everything!!".to_vec()))
    );
}

#[test]
fn test_try_decode_prefixed() {
    let expected = b"Decentralize everything!!".to_vec();
    let samples = vec![
        (Base2, "001000100011001010110001101100101011011100111010001110010011000010110110001101001011110100110010100100000011001010111011001100101011100100111100101110100011010000110100101101110011001110010000100100001"),
        (Base8, "71043126154533472162302661513646244031273145344745643206455631620441"),
        (Base16Lower, "f446563656e7472616c697a652065766572797468696e672121"),
        (Base16Upper, "F446563656E7472616C697A652065766572797468696E672121"),
        (Base32Lower, "birswgzloorzgc3djpjssazlwmvzhs5dinfxgoijb"),
        (Base32Upper, "BIRSWGZLOORZGC3DJPJSSAZLWMVZHS5DINFXGOIJB"),
        (Base32HexLower, "v8him6pbeehp62r39f9ii0pbmclp7it38d5n6e891"),
        (Base32HexUpper, "V8HIM6PBEEHP62R39F9II0PBMCLP7IT38D5N6E891"),
        (Base32PadLower, "cirswgzloorzgc3djpjssazlwmvzhs5dinfxgoijb"),
        (Base32PadUpper, "CIRSWGZLOORZGC3DJPJSSAZLWMVZHS5DINFXGOIJB"),
        (Base32HexPadLower, "t8him6pbeehp62r39f9ii0pbmclp7it38d5n6e891"),
        (Base32HexPadUpper, "T8HIM6PBEEHP62R39F9II0PBMCLP7IT38D5N6E891"),
        (Base32Z, "het1sg3mqqt3gn5djxj11y3msci3817depfzgqejb"),
        (Base58Flickr, "Ztwe7gVTeK8wswS1gf8hrgAua9fcw9reboD"),
        (Base58Btc, "zUXE7GvtEk8XTXs1GF8HSGbVA9FCX9SEBPe"),
        (Base64, "mRGVjZW50cmFsaXplIGV2ZXJ5dGhpbmchIQ"),
        (Base64Pad, "MRGVjZW50cmFsaXplIGV2ZXJ5dGhpbmchIQ=="),
        (Base64Url, "uRGVjZW50cmFsaXplIGV2ZXJ5dGhpbmchIQ"),
        (Base64UrlPad, "URGVjZW50cmFsaXplIGV2ZXJ5dGhpbmchIQ=="),
    ];

    for (base, s) in samples {
        assert_eq!(try_decode(s), Some((base, expected.clone())), "{}", base);
        assert_eq!(try_decode_any(s), Some((base, expected.clone())), "{}", base);
    }
}

#[test]
fn test_try_decode_unprefixed() {
    let expected = b"Decentralize everything!!".to_vec();
    let samples = vec![
        (Base2, "01000100011001010110001101100101011011100111010001110010011000010110110001101001011110100110010100100000011001010111011001100101011100100111100101110100011010000110100101101110011001110010000100100001"),
        (Base8, "1043126154533472162302661513646244031273145344745643206455631620441"),
        (Base16Lower, "446563656e7472616c697a652065766572797468696e672121"),
        (Base16Upper, "446563656E7472616C697A652065766572797468696E672121"),
        (Base32Lower, "irswgzloorzgc3djpjssazlwmvzhs5dinfxgoijb"),
        (Base32Upper, "IRSWGZLOORZGC3DJPJSSAZLWMVZHS5DINFXGOIJB"),
        (Base32HexLower, "8him6pbeehp62r39f9ii0pbmclp7it38d5n6e891"),
        (Base32HexUpper, "8HIM6PBEEHP62R39F9II0PBMCLP7IT38D5N6E891"),
        (Base32Z, "et1sg3mqqt3gn5djxj11y3msci3817depfzgqejb"),
        (Base64Pad, "RGVjZW50cmFsaXplIGV2ZXJ5dGhpbmchIQ=="),
    ];

    for (base, s) in samples {
        assert_eq!(try_decode_any(s), Some((base, expected.clone())), "{}", base);
    }
    assert_eq!(try_decode_any(""), None);
}

// Official multibase test vectors: (name, encoded) per input.
fn check_vectors(expected: &[u8], vectors: &[(&str, &str)]) {
    for (name, encoded) in vectors {
        let base: Base = name.parse().unwrap();
        let (decoded_base, decoded) = decode(encoded).unwrap();
        assert_eq!(decoded_base, base, "{}", name);
        assert_eq!(decoded, expected, "{}", name);
        assert_eq!(&encode(decoded_base, &decoded).unwrap(), encoded, "{}", name);
    }
}

#[test]
fn test_vectors_yes_mani() {
    check_vectors(
        b"yes mani !",
        &[
            ("base2", "001111001011001010111001100100000011011010110000101101110011010010010000000100001"),
            ("base8", "7171312714403326055632220041"),
            ("base10", "9573277761329450583662625"),
            ("base16", "f796573206d616e692021"),
            ("base16upper", "F796573206D616E692021"),
            ("base32", "bpfsxgidnmfxgsibb"),
            ("base32upper", "BPFSXGIDNMFXGSIBB"),
            ("base32hex", "vf5in683dc5n6i811"),
            ("base32hexupper", "VF5IN683DC5N6I811"),
            ("base32pad", "cpfsxgidnmfxgsibb"),
            ("base32padupper", "CPFSXGIDNMFXGSIBB"),
            ("base32hexpad", "tf5in683dc5n6i811"),
            ("base32hexpadupper", "TF5IN683DC5N6I811"),
            ("base32z", "hxf1zgedpcfzg1ebb"),
            ("base58flickr", "Z7Pznk19XTTzBtx"),
            ("base58btc", "z7paNL19xttacUY"),
            ("base64", "meWVzIG1hbmkgIQ"),
            ("base64pad", "MeWVzIG1hbmkgIQ=="),
            ("base64url", "ueWVzIG1hbmkgIQ"),
            ("base64urlpad", "UeWVzIG1hbmkgIQ=="),
        ],
    );
}

#[test]
fn test_vectors_hello_world() {
    check_vectors(
        b"hello world",
        &[
            ("base2", "00110100001100101011011000110110001101111001000000111011101101111011100100110110001100100"),
            ("base8", "764145330661571007355734466144"),
            ("base10", "9126207244316550804821666916"),
            ("base16", "f68656c6c6f20776f726c64"),
            ("base16upper", "F68656C6C6F20776F726C64"),
            ("base32", "bnbswy3dpeb3w64tmmq"),
            ("base32upper", "BNBSWY3DPEB3W64TMMQ"),
            ("base32hex", "vd1imor3f41rmusjccg"),
            ("base32hexupper", "VD1IMOR3F41RMUSJCCG"),
            ("base32pad", "cnbswy3dpeb3w64tmmq======"),
            ("base32padupper", "CNBSWY3DPEB3W64TMMQ======"),
            ("base32hexpad", "td1imor3f41rmusjccg======"),
            ("base32hexpadupper", "TD1IMOR3F41RMUSJCCG======"),
            ("base32z", "hpb1sa5dxrb5s6hucco"),
            ("base58flickr", "ZrTu1dk6cWsRYjYu"),
            ("base58btc", "zStV1DL6CwTryKyV"),
            ("base64", "maGVsbG8gd29ybGQ"),
            ("base64pad", "MaGVsbG8gd29ybGQ="),
            ("base64url", "uaGVsbG8gd29ybGQ"),
            ("base64urlpad", "UaGVsbG8gd29ybGQ="),
        ],
    );
}

#[test]
fn test_vectors_leading_zero() {
    check_vectors(
        b"\x00yes mani !",
        &[
            ("base2", "00000000001111001011001010111001100100000011011010110000101101110011010010010000000100001"),
            ("base8", "70171312714403326055632220041"),
            ("base10", "90573277761329450583662625"),
            ("base16", "f00796573206d616e692021"),
            ("base32", "bab4wk4zanvqw42jaee"),
            ("base32pad", "cab4wk4zanvqw42jaee======"),
            ("base32hex", "v01smasp0dlgmsq9044"),
            ("base32z", "hybhskh3ypiosh4jyrr"),
            ("base58flickr", "Z17Pznk19XTTzBtx"),
            ("base58btc", "z17paNL19xttacUY"),
            ("base64", "mAHllcyBtYW5pICE"),
            ("base64pad", "MAHllcyBtYW5pICE="),
        ],
    );
}

#[test]
fn test_vectors_two_leading_zeros() {
    check_vectors(
        b"\x00\x00yes mani !",
        &[
            ("base2", "0000000000000000001111001011001010111001100100000011011010110000101101110011010010010000000100001"),
            ("base8", "700171312714403326055632220041"),
            ("base10", "900573277761329450583662625"),
            ("base16", "f0000796573206d616e692021"),
            ("base32", "baaahszltebwwc3tjeaqq"),
            ("base32pad", "caaahszltebwwc3tjeaqq===="),
            ("base32z", "hyyy813murbssn5ujryoo"),
            ("base58flickr", "Z117Pznk19XTTzBtx"),
            ("base58btc", "z117paNL19xttacUY"),
            ("base64", "mAAB5ZXMgbWFuaSAh"),
            ("base64urlpad", "UAAB5ZXMgbWFuaSAh"),
        ],
    );
}

#[test]
fn test_identity() {
    let id = b"Decentralize everything!!!";
    assert_eq!(
        encode(Identity, id).unwrap(),
        "\0Decentralize everything!!!"
    );
    assert_eq!(
        decode("\0Decentralize everything!!!").unwrap(),
        (Identity, id.to_vec())
    );
}

#[test]
fn test_base2() {
    assert_eq!(&encode(Base2, b"1".to_vec()).unwrap(), "000110001");
    assert_eq!(&encode(Base2, b"12".to_vec()).unwrap(), "00011000100110010");
    assert_eq!(
        &encode(Base2, b"1234".to_vec()).unwrap(),
        "000110001001100100011001100110100"
    );

    assert_eq!(
        decode("000110001001100100011001100110100").unwrap(),
        (Base2, vec![49, 50, 51, 52])
    );
}

#[test]
fn test_concurrent_decoding() {
    let handles: Vec<_> = (0..10)
        .map(|_| thread::spawn(|| try_decode("Z6BLZQNPgws5ahFtr8x")))
        .collect();

    for handle in handles {
        let (base, bytes) = handle.join().unwrap().unwrap();
        assert_eq!(base, Base58Flickr);
        assert_eq!(String::from_utf8(bytes).unwrap(), "Concurrency !");
    }
}
