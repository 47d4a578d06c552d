//! Commands of a programmable transaction.

use crate::transaction::argument::Argument;
use crate::types::{Identifier, ObjectID, TypeTag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A call to a Move function.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgrammableMoveCall {
    /// The package containing the module and function.
    pub package: ObjectID,
    /// The module containing the function.
    pub module: Identifier,
    /// The function to call.
    pub function: Identifier,
    /// Type arguments to the function.
    pub type_arguments: Vec<TypeTag>,
    /// Arguments to the function.
    pub arguments: Vec<Argument>,
}

impl fmt::Display for ProgrammableMoveCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.package.to_short_string(),
            self.module,
            self.function
        )?;
        if !self.type_arguments.is_empty() {
            let params: Vec<String> = self.type_arguments.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", params.join(", "))?;
        }
        Ok(())
    }
}

/// A single command in a programmable transaction.
///
/// Variant order is part of the wire format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// A call to an entry or public Move function.
    MoveCall(Box<ProgrammableMoveCall>),
    /// Sends the objects to the address given by the last argument.
    TransferObjects(Vec<Argument>, Argument),
    /// Splits the coin into one new coin per amount.
    SplitCoins(Argument, Vec<Argument>),
    /// Merges the source coins into the destination coin.
    MergeCoins(Argument, Vec<Argument>),
    /// Publishes a package from compiled module bytes and dependency IDs.
    Publish(Vec<Vec<u8>>, Vec<ObjectID>),
    /// Builds a Move vector. The element type may only be omitted when the
    /// elements are objects.
    MakeMoveVec(Option<TypeTag>, Vec<Argument>),
    /// Upgrades a package: (modules, dependencies, current package, ticket).
    Upgrade(Vec<Vec<u8>>, Vec<ObjectID>, ObjectID, Argument),
}

impl Command {
    /// Creates a move call command.
    pub fn move_call(
        package: ObjectID,
        module: Identifier,
        function: Identifier,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<Argument>,
    ) -> Self {
        Command::MoveCall(Box::new(ProgrammableMoveCall {
            package,
            module,
            function,
            type_arguments,
            arguments,
        }))
    }

    /// Returns every argument the command reads, in wire order.
    pub fn arguments(&self) -> Vec<&Argument> {
        match self {
            Command::MoveCall(call) => call.arguments.iter().collect(),
            Command::TransferObjects(objects, recipient) => {
                objects.iter().chain(std::iter::once(recipient)).collect()
            }
            Command::SplitCoins(coin, amounts) => {
                std::iter::once(coin).chain(amounts.iter()).collect()
            }
            Command::MergeCoins(target, sources) => {
                std::iter::once(target).chain(sources.iter()).collect()
            }
            Command::Publish(_, _) => vec![],
            Command::MakeMoveVec(_, elements) => elements.iter().collect(),
            Command::Upgrade(_, _, _, ticket) => vec![ticket],
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MoveCall(call) => write!(f, "MoveCall({call})"),
            Command::TransferObjects(objects, _) => write!(f, "TransferObjects({})", objects.len()),
            Command::SplitCoins(_, amounts) => write!(f, "SplitCoins({})", amounts.len()),
            Command::MergeCoins(_, sources) => write!(f, "MergeCoins({})", sources.len()),
            Command::Publish(modules, _) => write!(f, "Publish({} modules)", modules.len()),
            Command::MakeMoveVec(_, elements) => write!(f, "MakeMoveVec({})", elements.len()),
            Command::Upgrade(_, _, package, _) => {
                write!(f, "Upgrade({})", package.to_short_string())
            }
        }
    }
}
