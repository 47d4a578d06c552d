//! Behavioral tests for the SDK.
//!
//! These tests drive the public API the way an application would and check
//! the transactions it produces, without requiring a live network.

mod builder_tests {
    use sui_rust_sdk::SuiError;
    use sui_rust_sdk::transaction::{
        Argument, CallArg, Command, ObjectArg, ProgrammableTransactionBuilder,
    };
    use sui_rust_sdk::types::{Identifier, ObjectDigest, ObjectID, ObjectRef, SuiAddress};

    fn coin(id: u64) -> ObjectRef {
        ObjectRef::new(ObjectID::from_u64(id), 1u64, ObjectDigest::new([id as u8; 32]))
    }

    #[test]
    fn test_equal_pure_values_share_a_slot() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let first = ptb.pure(42u64).unwrap();
        let second = ptb.pure(42u64).unwrap();
        let forced = ptb.force_separate_pure(42u64).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, forced);
        assert_eq!(ptb.finish().inputs.len(), 2);
    }

    #[test]
    fn test_pay_sui_groups_repeated_recipients() {
        let alice = SuiAddress::from_u64(0xa);
        let bob = SuiAddress::from_u64(0xb);

        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_sui(vec![alice, bob, alice], vec![1, 2, 3]).unwrap();
        let pt = ptb.finish();

        assert_eq!(
            pt.inputs,
            vec![
                CallArg::Pure(1u64.to_le_bytes().to_vec()),
                CallArg::Pure(2u64.to_le_bytes().to_vec()),
                CallArg::Pure(3u64.to_le_bytes().to_vec()),
                CallArg::Pure(alice.as_bytes().to_vec()),
                CallArg::Pure(bob.as_bytes().to_vec()),
            ]
        );
        assert_eq!(
            pt.commands,
            vec![
                Command::SplitCoins(
                    Argument::GasCoin,
                    vec![Argument::Input(0), Argument::Input(1), Argument::Input(2)]
                ),
                Command::TransferObjects(
                    vec![Argument::NestedResult(0, 0), Argument::NestedResult(0, 2)],
                    Argument::Input(3)
                ),
                Command::TransferObjects(vec![Argument::NestedResult(0, 1)], Argument::Input(4)),
            ]
        );
    }

    #[test]
    fn test_failed_pay_leaves_builder_untouched() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_object(SuiAddress::from_u64(1), vec![coin(7)]).unwrap();
        let before = ptb.snapshot();

        let err = ptb
            .pay(vec![coin(8)], vec![SuiAddress::from_u64(2)], vec![])
            .unwrap_err();
        assert!(matches!(err, SuiError::LengthMismatch { recipients: 1, amounts: 0 }));
        assert_eq!(ptb.snapshot(), before);

        // Same object id, different version: conflicts with the earlier registration.
        let stale = ObjectRef::new(ObjectID::from_u64(7), 2u64, ObjectDigest::new([7; 32]));
        let err = ptb
            .pay(vec![coin(9), stale], vec![SuiAddress::from_u64(2)], vec![5])
            .unwrap_err();
        assert!(err.is_incompatible_argument());
        assert_eq!(ptb.snapshot(), before);
    }

    #[test]
    fn test_shared_object_upgrades_to_mutable() {
        let id = ObjectID::from_u64(0x51);
        let mut ptb = ProgrammableTransactionBuilder::new();
        let read = ptb.obj(ObjectArg::shared(id, 4u64, false)).unwrap();
        let write = ptb.obj(ObjectArg::shared(id, 4u64, true)).unwrap();
        let read_again = ptb.obj(ObjectArg::shared(id, 4u64, false)).unwrap();

        assert_eq!(read, write);
        assert_eq!(write, read_again);
        assert_eq!(ptb.finish().inputs, vec![CallArg::Object(ObjectArg::shared(id, 4u64, true))]);
    }

    #[test]
    fn test_owned_and_shared_registration_conflict() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.obj(ObjectArg::ImmOrOwnedObject(coin(3))).unwrap();
        let err = ptb
            .obj(ObjectArg::shared(ObjectID::from_u64(3), 1u64, true))
            .unwrap_err();
        assert!(err.is_incompatible_argument());
    }

    #[test]
    fn test_commands_can_only_read_earlier_results() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let err = ptb
            .command(Command::MergeCoins(Argument::GasCoin, vec![Argument::Result(0)]))
            .unwrap_err();
        assert!(matches!(err, SuiError::InvariantViolation(_)));
        assert_eq!(ptb.command_count(), 0);

        let split = ptb.split_coins(Argument::GasCoin, vec![10, 20]).unwrap();
        let Argument::Result(i) = split else {
            panic!("expected a command result");
        };
        ptb.command(Command::MergeCoins(
            Argument::GasCoin,
            vec![Argument::NestedResult(i, 0), Argument::NestedResult(i, 1)],
        ))
        .unwrap();
        assert_eq!(ptb.command_count(), 2);
    }

    #[test]
    fn test_move_call_with_type_arguments() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.move_call(
            ObjectID::from_u64(2),
            Identifier::new("coin").unwrap(),
            Identifier::new("value").unwrap(),
            vec!["0x2::sui::SUI".parse().unwrap()],
            vec![CallArg::Object(ObjectArg::ImmOrOwnedObject(coin(5)))],
        )
        .unwrap();
        let pt = ptb.finish();

        let Command::MoveCall(call) = &pt.commands[0] else {
            panic!("expected a move call");
        };
        assert_eq!(call.to_string(), "0x2::coin::value");
        assert_eq!(call.type_arguments[0].to_string(), "0x2::sui::SUI");
        assert_eq!(call.arguments, vec![Argument::Input(0)]);
    }

    #[test]
    fn test_publish_immutable_consumes_upgrade_cap() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.publish_immutable(vec![vec![0xa1, 0x1c]], vec![ObjectID::from_u64(1), ObjectID::from_u64(2)])
            .unwrap();
        let pt = ptb.finish();

        assert!(pt.inputs.is_empty());
        assert!(matches!(pt.commands[0], Command::Publish(_, _)));
        let Command::MoveCall(call) = &pt.commands[1] else {
            panic!("expected a move call");
        };
        assert_eq!(call.to_string(), "0x2::package::make_immutable");
        assert_eq!(call.arguments, vec![Argument::Result(0)]);
    }
}

mod envelope_tests {
    use sui_rust_sdk::codec;
    use sui_rust_sdk::transaction::{
        ProgrammableTransactionBuilder, TransactionData, TransactionDataBuilder,
        TransactionExpiration, stake,
    };
    use sui_rust_sdk::types::{Digest, ObjectDigest, ObjectID, ObjectRef, SuiAddress};
    use sui_rust_sdk::{SuiConfig, SuiError};

    fn gas() -> ObjectRef {
        ObjectRef::new(ObjectID::from_u64(0x99), 5u64, ObjectDigest::new([0xd1; 32]))
    }

    #[test]
    fn test_pay_all_sui_exact_bytes() {
        let sender = SuiAddress::from_u64(0x1);
        let recipient = SuiAddress::from_u64(0x2);

        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_all_sui(recipient).unwrap();
        let data = TransactionData::new_programmable(sender, vec![gas()], ptb.finish(), 100, 7)
            .unwrap();

        let mut expected = vec![0x00, 0x00]; // V1, ProgrammableTransaction
        expected.extend([0x01, 0x00, 0x20]); // one Pure input of 32 bytes
        expected.extend(recipient.as_bytes());
        expected.extend([0x01, 0x01, 0x01, 0x00, 0x01, 0x00, 0x00]); // TransferObjects([GasCoin], Input(0))
        expected.extend(sender.as_bytes());
        expected.push(0x01); // one gas coin
        expected.extend(gas().object_id.as_bytes());
        expected.extend(5u64.to_le_bytes());
        expected.push(0x20);
        expected.extend([0xd1; 32]);
        expected.extend(sender.as_bytes()); // gas owner
        expected.extend(7u64.to_le_bytes());
        expected.extend(100u64.to_le_bytes());
        expected.push(0x00); // no expiration

        let bytes = data.to_bcs().unwrap();
        assert_eq!(bytes, expected);
        assert_eq!(TransactionData::from_bcs(&bytes).unwrap(), data);
    }

    #[test]
    fn test_digest_is_salted_blake2b() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_all_sui(SuiAddress::from_u64(2)).unwrap();
        let data =
            TransactionData::new_programmable(SuiAddress::from_u64(1), vec![gas()], ptb.finish(), 1, 1)
                .unwrap();

        let mut salted = b"TransactionData::".to_vec();
        salted.extend(data.to_bcs().unwrap());
        assert_eq!(*data.digest().unwrap().inner(), Digest::blake2b256(&salted));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_all_sui(SuiAddress::from_u64(2)).unwrap();
        let data =
            TransactionData::new_programmable(SuiAddress::from_u64(1), vec![gas()], ptb.finish(), 1, 1)
                .unwrap();

        let mut bytes = data.to_bcs().unwrap();
        bytes.push(0);
        let err = TransactionData::from_bcs(&bytes).unwrap_err();
        assert!(err.is_codec_error());
    }

    #[test]
    fn test_builder_uses_config_gas_defaults() {
        let config = SuiConfig::testnet().with_gas_budget(123).with_gas_price(4);
        let sender = SuiAddress::from_u64(1);
        let sponsor = SuiAddress::from_u64(9);

        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_all_sui(sender).unwrap();
        let data = TransactionDataBuilder::from_config(&config)
            .sender(sender)
            .sponsor(sponsor)
            .programmable(ptb.finish())
            .gas_payment(vec![gas()])
            .expiration_epoch(77)
            .build()
            .unwrap();

        assert_eq!(data.gas_budget(), 123);
        assert_eq!(data.gas_price(), 4);
        assert!(data.is_sponsored());
        assert_eq!(data.gas_owner(), sponsor);
        assert_eq!(data.expiration(), TransactionExpiration::Epoch(77));
        assert_eq!(codec::from_base64::<TransactionData>(&data.to_base64().unwrap()).unwrap(), data);
    }

    #[test]
    fn test_assembly_requires_gas_payment() {
        let sender = SuiAddress::from_u64(1);
        let err = stake::request_add_stake(sender, vec![], 5, SuiAddress::from_u64(0x7a1), 10, 1)
            .unwrap_err();
        assert!(matches!(err, SuiError::EmptyInput(_)));

        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_all_sui(sender).unwrap();
        let err = TransactionData::new_programmable(sender, vec![], ptb.finish(), 1, 1).unwrap_err();
        assert!(matches!(err, SuiError::EmptyInput(_)));
    }

    #[test]
    fn test_builder_requires_gas_payment() {
        let err = TransactionDataBuilder::new()
            .sender(SuiAddress::from_u64(1))
            .programmable(ProgrammableTransactionBuilder::new().finish())
            .build()
            .unwrap_err();
        assert!(matches!(err, SuiError::EmptyInput(_)));
    }
}

mod execution_tests {
    use async_trait::async_trait;
    use sui_rust_sdk::api::{
        DryRunTransactionBlockResponse, TransactionBlockResponse, TransactionExecutor,
        sign_and_execute,
    };
    use sui_rust_sdk::transaction::{
        Intent, IntentMessage, ProgrammableTransactionBuilder, SignedTransaction, TransactionData,
        TransactionSigner,
    };
    use sui_rust_sdk::types::{ObjectDigest, ObjectID, ObjectRef, SuiAddress};
    use sui_rust_sdk::{SuiError, SuiResult};

    struct DigestSigner(SuiAddress);

    impl TransactionSigner for DigestSigner {
        fn address(&self) -> SuiAddress {
            self.0
        }

        fn sign(&self, message: &[u8], _intent: &Intent) -> SuiResult<Vec<u8>> {
            Ok(message.to_vec())
        }
    }

    /// Checks the signature covers the intent digest and answers with a
    /// canned JSON response.
    struct FixtureExecutor {
        response: serde_json::Value,
    }

    #[async_trait]
    impl TransactionExecutor for FixtureExecutor {
        async fn execute(&self, tx: &SignedTransaction) -> SuiResult<TransactionBlockResponse> {
            let digest = IntentMessage::new(Intent::sui_transaction(), &tx.data).signing_digest()?;
            if tx.signatures != vec![digest.as_bytes().to_vec()] {
                return Err(SuiError::Signing("signature does not cover the intent digest".into()));
            }
            Ok(serde_json::from_value(self.response.clone())?)
        }

        async fn dry_run(&self, _data: &TransactionData) -> SuiResult<DryRunTransactionBlockResponse> {
            Err(SuiError::Internal("dry run not supported".into()))
        }
    }

    fn response(status: serde_json::Value) -> serde_json::Value {
        let owner = serde_json::json!({ "AddressOwner": "0x1" });
        let gas_ref = serde_json::json!({
            "objectId": "0x99",
            "version": "2",
            "digest": "11111111111111111111111111111111"
        });
        serde_json::json!({
            "digest": "11111111111111111111111111111111",
            "effects": {
                "messageVersion": "v1",
                "status": status,
                "executedEpoch": "1",
                "gasUsed": {
                    "computationCost": "750000",
                    "storageCost": "1976000",
                    "storageRebate": "978120",
                    "nonRefundableStorageFee": "9880"
                },
                "transactionDigest": "11111111111111111111111111111111",
                "mutated": [{ "owner": owner, "reference": gas_ref }],
                "gasObject": { "owner": owner, "reference": gas_ref }
            }
        })
    }

    fn transfer() -> TransactionData {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_sui(SuiAddress::from_u64(2), Some(1_000)).unwrap();
        TransactionData::new_programmable(
            SuiAddress::from_u64(1),
            vec![ObjectRef::new(ObjectID::from_u64(0x99), 1u64, ObjectDigest::default())],
            ptb.finish(),
            5_000_000,
            1_000,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_execute_transfer() {
        let executor = FixtureExecutor {
            response: response(serde_json::json!({ "status": "success" })),
        };
        let resp = sign_and_execute(&executor, &DigestSigner(SuiAddress::from_u64(1)), &transfer())
            .await
            .unwrap();

        assert!(resp.is_success());
        assert_eq!(resp.mutated_object_ids(), vec![ObjectID::from_u64(0x99)]);
        assert_eq!(resp.gas_cost_summary().unwrap().net_gas_usage(), 1_747_880);
    }

    #[tokio::test]
    async fn test_execute_reports_abort() {
        let executor = FixtureExecutor {
            response: response(serde_json::json!({
                "status": "failure",
                "error": "InsufficientCoinBalance in command 0"
            })),
        };
        let err = sign_and_execute(&executor, &DigestSigner(SuiAddress::from_u64(1)), &transfer())
            .await
            .unwrap_err();
        assert!(matches!(err, SuiError::ExecutionFailed { .. }));
    }
}
