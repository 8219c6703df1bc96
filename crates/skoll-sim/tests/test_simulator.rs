//! Integration tests for the statevector backend.
//!
//! Exercises full circuits end to end: evolution, readout wiring, and
//! sampling behavior.

use ndarray::Array2;
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use skoll_ir::{Circuit, ClbitId, QubitId, Unitary};
use skoll_sim::SimulatorBackend;

fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

fn pauli_x() -> Unitary {
    let mut m = Array2::<Complex64>::zeros((2, 2));
    m[[0, 1]] = c(1.0);
    m[[1, 0]] = c(1.0);
    Unitary::new("x", m).unwrap()
}

/// CNOT with the control on sub-bit 0 and the target on sub-bit 1.
fn cnot() -> Unitary {
    let mut m = Array2::<Complex64>::zeros((4, 4));
    m[[0, 0]] = c(1.0);
    m[[2, 2]] = c(1.0);
    m[[3, 1]] = c(1.0);
    m[[1, 3]] = c(1.0);
    Unitary::new("cx", m).unwrap()
}

#[test]
fn test_bell_state_counts() {
    let mut circuit = Circuit::with_size("bell", 2, 2);
    circuit
        .unitary(Unitary::hadamard(1), [QubitId(0)])
        .unwrap()
        .unitary(cnot(), [QubitId(0), QubitId(1)])
        .unwrap()
        .measure_all()
        .unwrap();

    let backend = SimulatorBackend::new();
    let result = backend.run(&circuit, 1000).unwrap();

    // Only the correlated outcomes appear.
    assert_eq!(result.counts.get("00") + result.counts.get("11"), 1000);
    assert_eq!(result.counts.get("01"), 0);
    assert_eq!(result.counts.get("10"), 0);
}

#[test]
fn test_bitstring_orientation() {
    // Qubit 0 in |1⟩ reads out as the rightmost character.
    let mut circuit = Circuit::with_size("orient", 2, 2);
    circuit.unitary(pauli_x(), [QubitId(0)]).unwrap();
    circuit.measure_all().unwrap();

    let backend = SimulatorBackend::new();
    let result = backend.run(&circuit, 100).unwrap();
    assert_eq!(result.counts.get("01"), 100);

    // And qubit 1 as the leftmost.
    let mut circuit = Circuit::with_size("orient", 2, 2);
    circuit.unitary(pauli_x(), [QubitId(1)]).unwrap();
    circuit.measure_all().unwrap();

    let result = backend.run(&circuit, 100).unwrap();
    assert_eq!(result.counts.get("10"), 100);
}

#[test]
fn test_gapped_target_subset() {
    // CNOT with control q0 and target q2 leaves q1 untouched in between.
    let mut circuit = Circuit::with_size("gapped", 3, 3);
    circuit.unitary(pauli_x(), [QubitId(0)]).unwrap();
    circuit.unitary(cnot(), [QubitId(0), QubitId(2)]).unwrap();
    circuit.measure_all().unwrap();

    let backend = SimulatorBackend::new();
    let result = backend.run(&circuit, 100).unwrap();
    assert_eq!(result.counts.get("101"), 100);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let mut circuit = Circuit::with_size("seeded", 2, 2);
    let h = Unitary::hadamard(1);
    circuit.unitary(h.clone(), [QubitId(0)]).unwrap();
    circuit.unitary(h, [QubitId(1)]).unwrap();
    circuit.measure_all().unwrap();

    let backend = SimulatorBackend::new();
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let a = backend.run_with_rng(&circuit, 500, &mut rng_a).unwrap();
    let b = backend.run_with_rng(&circuit, 500, &mut rng_b).unwrap();
    assert_eq!(a.counts, b.counts);
}

#[test]
fn test_partial_measurement() {
    // Measure only qubit 0 of an entangled pair; keys are one bit wide.
    let mut circuit = Circuit::with_size("partial", 2, 1);
    circuit
        .unitary(Unitary::hadamard(1), [QubitId(0)])
        .unwrap()
        .unitary(cnot(), [QubitId(0), QubitId(1)])
        .unwrap()
        .measure(QubitId(0), ClbitId(0))
        .unwrap();

    let backend = SimulatorBackend::new();
    let result = backend.run(&circuit, 200).unwrap();
    assert_eq!(result.counts.get("0") + result.counts.get("1"), 200);
}

#[test]
fn test_remeasure_overwrites_clbit() {
    // q0 is |1⟩, q1 is |0⟩; c0 is written by q0 first, then by q1.
    let mut circuit = Circuit::with_size("overwrite", 2, 1);
    circuit.unitary(pauli_x(), [QubitId(0)]).unwrap();
    circuit.measure(QubitId(0), ClbitId(0)).unwrap();
    circuit.measure(QubitId(1), ClbitId(0)).unwrap();

    let backend = SimulatorBackend::new();
    let result = backend.run(&circuit, 50).unwrap();
    assert_eq!(result.counts.get("0"), 50);
}

#[test]
fn test_readout_into_wider_register() {
    // One qubit read into bit 1 of a two-bit register.
    let mut circuit = Circuit::with_size("wide", 1, 2);
    circuit.unitary(pauli_x(), [QubitId(0)]).unwrap();
    circuit.measure(QubitId(0), ClbitId(1)).unwrap();

    let backend = SimulatorBackend::new();
    let result = backend.run(&circuit, 25).unwrap();
    assert_eq!(result.counts.get("10"), 25);
}

#[test]
fn test_readout_wider_than_machine_word() {
    // Classical registers are not bounded by usize::BITS.
    let mut circuit = Circuit::with_size("very_wide", 1, 65);
    circuit.unitary(pauli_x(), [QubitId(0)]).unwrap();
    circuit.measure(QubitId(0), ClbitId(64)).unwrap();

    let backend = SimulatorBackend::new();
    let result = backend.run(&circuit, 10).unwrap();
    let expected = format!("1{}", "0".repeat(64));
    assert_eq!(result.counts.get(&expected), 10);
}

#[test]
fn test_statevector_accessor() {
    let mut circuit = Circuit::with_size("probe", 2, 0);
    let h = Unitary::hadamard(1);
    circuit.unitary(h.clone(), [QubitId(0)]).unwrap();
    circuit.unitary(h, [QubitId(1)]).unwrap();

    let backend = SimulatorBackend::new();
    let sv = backend.statevector(&circuit).unwrap();
    for p in sv.probabilities() {
        assert!((p - 0.25).abs() < 1e-10);
    }
}

#[test]
fn test_most_frequent_on_biased_circuit() {
    let mut circuit = Circuit::with_size("biased", 1, 1);
    circuit.unitary(pauli_x(), [QubitId(0)]).unwrap();
    circuit.measure_all().unwrap();

    let backend = SimulatorBackend::new();
    let result = backend.run(&circuit, 64).unwrap();
    assert_eq!(result.counts.most_frequent(), Some(("1", 64)));
    assert!((result.frequency("1") - 1.0).abs() < 1e-12);
}
