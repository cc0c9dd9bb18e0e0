use std::fmt;

use crate::symbols::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    /// The accumulator. Every expression leaves its result here.
    R0,
    R1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    /// Load a decimal literal, kept exactly as written in the source.
    LoadI(Reg, String),
    Load(Reg, Address),
    Store(Reg, Address),

    Push(Reg),
    Pop(Reg),

    Add(Reg, Reg),
    Sub(Reg, Reg),

    Cmp(Reg, u8),
    Jne(Label),

    /// A jump target marker.
    Label(Label),
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reg::R0 => write!(f, "R0"),
            Reg::R1 => write!(f, "R1"),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LABEL_{}", self.0)
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::LoadI(rd, imm) => write!(f, "LOADI {rd}, {imm}"),
            Instr::Load(rd, addr) => write!(f, "LOAD {rd}, {addr}"),
            Instr::Store(rs, addr) => write!(f, "STORE {rs}, {addr}"),
            Instr::Push(rs) => write!(f, "PUSH {rs}"),
            Instr::Pop(rd) => write!(f, "POP {rd}"),
            Instr::Add(rd, rs) => write!(f, "ADD {rd}, {rs}"),
            Instr::Sub(rd, rs) => write!(f, "SUB {rd}, {rs}"),
            Instr::Cmp(rd, imm) => write!(f, "CMP {rd}, {imm}"),
            Instr::Jne(label) => write!(f, "JNE {label}"),
            Instr::Label(label) => write!(f, "{label}:"),
        }
    }
}

/// An ordered instruction listing, printed one instruction per line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub instrs: Vec<Instr>,
}

impl Assembly {
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.instrs.iter().map(Instr::to_string)
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.instrs
            .iter()
            .try_for_each(|instr| writeln!(f, "{instr}"))
    }
}
