//! High-level circuit builder API.

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::qubit::{ClbitId, QubitId};
use crate::unitary::Unitary;

/// An ordered sequence of unitary transforms with terminal measurement.
///
/// Instructions are stored and applied in append order. Measurement is a
/// terminal readout: once any measurement has been appended, further
/// unitaries are rejected. Additional measurements may follow (a re-measured
/// qubit simply overwrites its destination bit).
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits in the register.
    num_qubits: u32,
    /// Number of classical bits in the readout register.
    num_clbits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: 0,
            num_clbits: 0,
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.num_clbits);
        self.num_clbits += 1;
        id
    }

    /// Name of the circuit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Number of instructions appended so far.
    pub fn num_instructions(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instructions, in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Whether the circuit contains a measurement.
    pub fn has_measurements(&self) -> bool {
        self.instructions.iter().any(Instruction::is_measure)
    }

    /// Apply a transform to the given qubits.
    ///
    /// `qubits[b]` becomes bit `b` of the transform's basis indices, so for
    /// an all-qubit transform pass the qubits in register order.
    ///
    /// # Errors
    ///
    /// Returns [`IrError::ArityMismatch`] if the qubit count does not match
    /// the transform, [`IrError::QubitOutOfRange`] or
    /// [`IrError::DuplicateQubit`] for bad operands, and
    /// [`IrError::UnitaryAfterMeasure`] if a measurement was already
    /// appended.
    pub fn unitary(
        &mut self,
        unitary: Unitary,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        let qubits: Vec<QubitId> = qubits.into_iter().collect();
        if self.has_measurements() {
            return Err(IrError::UnitaryAfterMeasure {
                transform: unitary.name().to_string(),
            });
        }
        if unitary.num_qubits() as usize != qubits.len() {
            return Err(IrError::ArityMismatch {
                transform: unitary.name().to_string(),
                expected: unitary.num_qubits(),
                got: qubits.len() as u32,
            });
        }
        for (i, &qubit) in qubits.iter().enumerate() {
            self.check_qubit(qubit)?;
            if qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    transform: unitary.name().to_string(),
                });
            }
        }
        self.instructions.push(Instruction::unitary(unitary, qubits));
        Ok(self)
    }

    /// Measure a qubit into a classical bit.
    ///
    /// # Errors
    ///
    /// Returns [`IrError::QubitOutOfRange`] or [`IrError::ClbitOutOfRange`]
    /// for bad operands.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.check_clbit(clbit)?;
        self.instructions.push(Instruction::measure(qubit, clbit));
        Ok(self)
    }

    /// Measure every qubit into the classical bit with the same index,
    /// growing the classical register if it is smaller than the quantum one.
    ///
    /// # Errors
    ///
    /// Infallible today: the qubit and classical bit lists are built with
    /// equal lengths.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        while self.num_clbits < self.num_qubits {
            self.add_clbit();
        }
        let qubits: Vec<QubitId> = (0..self.num_qubits).map(QubitId).collect();
        let clbits: Vec<ClbitId> = (0..self.num_qubits).map(ClbitId).collect();
        self.instructions.push(Instruction::measure_all(qubits, clbits)?);
        Ok(self)
    }

    fn check_qubit(&self, qubit: QubitId) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_clbit(&self, clbit: ClbitId) -> IrResult<()> {
        if clbit.0 >= self.num_clbits {
            return Err(IrError::ClbitOutOfRange {
                clbit,
                num_clbits: self.num_clbits,
            });
        }
        Ok(())
    }
}
