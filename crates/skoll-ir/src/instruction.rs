//! Circuit instructions.

use crate::error::{IrError, IrResult};
use crate::qubit::{ClbitId, QubitId};
use crate::unitary::Unitary;

/// The operation an [`Instruction`] performs.
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionKind {
    /// Apply a dense transform to the listed qubits.
    Unitary(Unitary),
    /// Read the listed qubits out into classical bits.
    Measure,
}

/// A single operation together with its operands.
///
/// For unitaries, `qubits[b]` is the qubit that bit `b` of the transform's
/// matrix indices refers to. For measurements, `qubits[i]` is read out into
/// `clbits[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// What the instruction does.
    pub kind: InstructionKind,
    /// Target qubits, in operand order.
    pub qubits: Vec<QubitId>,
    /// Destination classical bits (empty for unitaries).
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Create a unitary instruction.
    pub fn unitary(unitary: Unitary, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Unitary(unitary),
            qubits: qubits.into_iter().collect(),
            clbits: Vec::new(),
        }
    }

    /// Create a single-qubit measurement.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// Create a measurement reading `qubits[i]` into `clbits[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`IrError::MeasureLengthMismatch`] if the lists differ in
    /// length.
    pub fn measure_all(qubits: Vec<QubitId>, clbits: Vec<ClbitId>) -> IrResult<Self> {
        if qubits.len() != clbits.len() {
            return Err(IrError::MeasureLengthMismatch {
                qubits: qubits.len(),
                clbits: clbits.len(),
            });
        }
        Ok(Self {
            kind: InstructionKind::Measure,
            qubits,
            clbits,
        })
    }

    /// The instruction's name: the transform name, or `"measure"`.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Unitary(u) => u.name(),
            InstructionKind::Measure => "measure",
        }
    }

    /// Whether this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// The transform, if this is a unitary instruction.
    pub fn as_unitary(&self) -> Option<&Unitary> {
        match &self.kind {
            InstructionKind::Unitary(u) => Some(u),
            InstructionKind::Measure => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unitary_instruction() {
        let h = Unitary::hadamard(1);
        let inst = Instruction::unitary(h, [QubitId(2)]);
        assert_eq!(inst.name(), "h");
        assert!(!inst.is_measure());
        assert!(inst.as_unitary().is_some());
        assert_eq!(inst.qubits, vec![QubitId(2)]);
        assert!(inst.clbits.is_empty());
    }

    #[test]
    fn test_measure_instruction() {
        let inst = Instruction::measure(QubitId(0), ClbitId(1));
        assert_eq!(inst.name(), "measure");
        assert!(inst.is_measure());
        assert!(inst.as_unitary().is_none());
        assert_eq!(inst.clbits, vec![ClbitId(1)]);
    }

    #[test]
    fn test_measure_all_length_check() {
        let err = Instruction::measure_all(vec![QubitId(0), QubitId(1)], vec![ClbitId(0)])
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::MeasureLengthMismatch {
                qubits: 2,
                clbits: 1
            }
        ));
    }
}
