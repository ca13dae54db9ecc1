//! End-to-end pipeline properties: pack/unpack identity, cipher
//! involution, framing roundtrip under arbitrary delivery order.

use bytes::Bytes;
use proptest::prelude::*;

use quasar::cipher::process;
use quasar::container::{pack, unpack, Artifact, PackOptions};
use quasar::link::{fragment, ReassemblyBuffer};

proptest! {
    #[test]
    fn pack_unpack_is_identity_without_cipher(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let archive = pack(&Artifact::Bytes(data.clone()), &PackOptions::default()).unwrap();
        match unpack(&archive.bytes, None).unwrap() {
            Artifact::Bytes(restored) => prop_assert_eq!(restored, data),
            other => prop_assert!(false, "expected bytes, got {:?}", other),
        }
    }

    #[test]
    fn cipher_is_an_involution(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
    ) {
        let mut processed = data.clone();
        process(&mut processed, &key, &nonce);
        process(&mut processed, &key, &nonce);
        prop_assert_eq!(processed, data);
    }

    #[test]
    fn encrypted_pack_unpack_is_identity(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        key in any::<[u8; 32]>(),
    ) {
        let opts = PackOptions { encrypt: true, key: Some(key), ..Default::default() };
        let archive = pack(&Artifact::Bytes(data.clone()), &opts).unwrap();
        match unpack(&archive.bytes, Some(&key)).unwrap() {
            Artifact::Bytes(restored) => prop_assert_eq!(restored, data),
            other => prop_assert!(false, "expected bytes, got {:?}", other),
        }
    }

    #[test]
    fn framing_reassembles_under_any_order(
        blob in proptest::collection::vec(any::<u8>(), 1..10_000),
        seed in any::<u64>(),
    ) {
        let blob = Bytes::from(blob);
        let mut datagrams = fragment(1, &blob).unwrap();

        // Deterministic permutation from the seed.
        let mut state = seed | 1;
        for i in (1..datagrams.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state % (i as u64 + 1)) as usize;
            datagrams.swap(i, j);
        }

        let mut buffer = ReassemblyBuffer::new();
        let mut delivered = None;
        for pkt in datagrams {
            if let Some(out) = buffer.accept(pkt) {
                delivered = Some(out);
            }
        }
        prop_assert_eq!(delivered.unwrap(), blob.to_vec());
    }

    #[test]
    fn pack_fragment_reassemble_unpack_end_to_end(
        data in proptest::collection::vec(any::<u8>(), 0..6000),
        key in any::<[u8; 32]>(),
    ) {
        let opts = PackOptions { encrypt: true, key: Some(key), ..Default::default() };
        let archive = pack(&Artifact::Bytes(data.clone()), &opts).unwrap();

        let blob = Bytes::from(archive.bytes);
        let datagrams = fragment(1, &blob).unwrap();

        let mut buffer = ReassemblyBuffer::new();
        let mut delivered = None;
        for pkt in datagrams.into_iter().rev() {
            if let Some(out) = buffer.accept(pkt) {
                delivered = Some(out);
            }
        }

        let restored = unpack(&delivered.unwrap(), Some(&key)).unwrap();
        match restored {
            Artifact::Bytes(restored) => prop_assert_eq!(restored, data),
            other => prop_assert!(false, "expected bytes, got {:?}", other),
        }
    }
}
