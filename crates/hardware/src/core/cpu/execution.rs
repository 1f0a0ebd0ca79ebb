//! Instruction Execution.
//!
//! This module implements the per-instruction cycle of the CPU. It performs the following:
//! 1. **Fetch/Decode:** Reads the word at the PC and decodes it, applying the
//!    unsupported-encoding policy.
//! 2. **Hazard Reporting:** Tells the hazard tracker which registers are read and
//!    written, before any value is produced.
//! 3. **Execute/Memory/Writeback:** Runs the ALU, performs the data access and
//!    commits the result.
//! 4. **Control Transfer:** Redirects the PC and charges either a flush or one
//!    clock cycle.
//! 5. **System Services:** Console output and input for the `trap` instruction.

use super::{Cpu, Status};
use crate::common::constants::{
    TRAP_PRINT_INT, TRAP_PRINT_NEWLINE, TRAP_READ_INT, TRAP_STOP, WORD_BYTES,
};
use crate::common::{SimError, UnsupportedKind};
use crate::config::Severity;
use crate::core::pipeline::signals::{AluOp, ControlSignals, MemOp};
use crate::isa::abi;
use crate::isa::decode::decode;
use crate::isa::disasm::format_instruction;
use crate::isa::instruction::{Destination, Instruction, branch_target, jump_target};
use crate::soc::System;
use crate::soc::console::Console;

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Arguments
    ///
    /// * `system` - Instruction and data memory.
    /// * `console` - Console used by trap services.
    ///
    /// # Returns
    ///
    /// [`Status::Halted`] once the stop trap has executed, otherwise
    /// [`Status::Running`].
    ///
    /// # Errors
    ///
    /// Returns the first fatal condition: a memory fault, an unsupported
    /// encoding whose policy is `Fatal`, an unknown trap request, or a console
    /// failure. The PC already points past the failing instruction.
    pub fn step<C: Console>(
        &mut self,
        system: &mut System,
        console: &mut C,
    ) -> Result<Status, SimError> {
        if self.halted {
            return Ok(Status::Halted);
        }

        let pc = self.pc;
        let raw = system.fetch(pc)?;
        self.pc = pc.wrapping_add(WORD_BYTES);

        let inst = match decode(raw) {
            Ok(inst) => inst,
            Err(kind) => return self.unsupported(pc, raw, kind),
        };

        if let Instruction::Trap {
            code: TRAP_STOP, ..
        } = inst
        {
            self.halted = true;
            tracing::info!(pc = format_args!("{pc:#010x}"), "stop trap");
            return Ok(Status::Halted);
        }

        self.report_hazards(pc, &inst)?;

        let (ctrl, redirect) = self.control(pc, &inst, console)?;

        let alu_out = self.alu.execute(ctrl.alu_op, ctrl.alu_src1, ctrl.alu_src2);

        let mem_out = match ctrl.mem_op {
            MemOp::Load => system.load_word(alu_out)?,
            MemOp::Store => {
                system.store_word(alu_out, ctrl.store_data)?;
                alu_out
            }
            MemOp::None => alu_out,
        };

        if ctrl.write_dest {
            self.regs.write(ctrl.dest_reg, mem_out);
        }
        if ctrl.mult_div {
            self.regs.hi = self.alu.hi();
            self.regs.lo = self.alu.lo();
        }

        match redirect {
            Some(target) => {
                self.pc = target;
                self.hazards.insert_flush(self.flush_penalty);
            }
            None => self.hazards.advance_clock(),
        }
        self.instructions += 1;

        self.trace_retired(pc, raw, &inst);
        Ok(Status::Running)
    }

    /// Reports the instruction's register reads and write to the hazard tracker.
    fn report_hazards(&mut self, pc: u32, inst: &Instruction) -> Result<(), SimError> {
        if let Instruction::Trap { rs, rt, code } = *inst {
            match code {
                TRAP_PRINT_NEWLINE => {}
                TRAP_PRINT_INT => self.hazards.record_source_read(rs),
                TRAP_READ_INT => self.hazards.record_destination_write(rt),
                _ => return Err(SimError::UnsupportedSystemRequest { pc, code }),
            }
            return Ok(());
        }

        for reg in inst.sources().into_iter().flatten() {
            self.hazards.record_source_read(reg);
        }

        match inst.destination() {
            Some(Destination::Load(reg)) => self.hazards.record_load_destination(reg),
            Some(dest) => self.hazards.record_destination_write(dest.index()),
            None => {}
        }

        if inst.is_memory_op() {
            self.hazards.count_memory_op();
        }
        if inst.is_branch() {
            self.hazards.count_branch();
        }
        Ok(())
    }

    /// Builds the control signals for `inst` and resolves control transfers.
    ///
    /// Returns the signals plus the redirect target of a taken branch or jump.
    fn control<C: Console>(
        &mut self,
        pc: u32,
        inst: &Instruction,
        console: &mut C,
    ) -> Result<(ControlSignals, Option<u32>), SimError> {
        let next_pc = pc.wrapping_add(WORD_BYTES);
        let r = |idx: usize| self.regs.read(idx);
        let mut ctrl = ControlSignals::default();
        let mut redirect = None;

        match *inst {
            Instruction::Sll { rd, rt, shamt } => {
                ctrl = alu_write(rd, AluOp::Sll, r(rt), shamt);
            }
            Instruction::Sra { rd, rt, shamt } => {
                ctrl = alu_write(rd, AluOp::Sra, r(rt), shamt);
            }
            Instruction::Jr { rs } => redirect = Some(r(rs)),
            Instruction::Mfhi { rd } => ctrl = alu_write(rd, AluOp::Add, self.regs.hi, 0),
            Instruction::Mflo { rd } => ctrl = alu_write(rd, AluOp::Add, self.regs.lo, 0),
            Instruction::Mult { rs, rt } => ctrl = hilo_write(AluOp::Mul, r(rs), r(rt)),
            Instruction::Div { rs, rt } => ctrl = hilo_write(AluOp::Div, r(rs), r(rt)),
            Instruction::Addu { rd, rs, rt } => ctrl = alu_write(rd, AluOp::Add, r(rs), r(rt)),
            Instruction::Subu { rd, rs, rt } => ctrl = alu_write(rd, AluOp::Sub, r(rs), r(rt)),
            Instruction::Slt { rd, rs, rt } => ctrl = alu_write(rd, AluOp::Slt, r(rs), r(rt)),
            Instruction::J { target } => redirect = Some(jump_target(next_pc, target)),
            Instruction::Jal { target } => {
                ctrl = alu_write(abi::REG_RA, AluOp::Add, next_pc, 0);
                redirect = Some(jump_target(next_pc, target));
            }
            Instruction::Beq { rs, rt, offset } => {
                if r(rs) == r(rt) {
                    self.hazards.count_taken();
                    redirect = Some(branch_target(next_pc, offset));
                }
            }
            Instruction::Bne { rs, rt, offset } => {
                if r(rs) != r(rt) {
                    self.hazards.count_taken();
                    redirect = Some(branch_target(next_pc, offset));
                }
            }
            Instruction::Addiu { rt, rs, imm } => {
                ctrl = alu_write(rt, AluOp::Add, r(rs), imm as u32);
            }
            Instruction::Andi { rt, rs, imm } => ctrl = alu_write(rt, AluOp::And, r(rs), imm),
            Instruction::Lui { rt, imm } => ctrl = alu_write(rt, AluOp::Sll, imm, 16),
            Instruction::Trap { rs, rt, code } => {
                if let Some(value) = service(pc, code, r(rs), console)? {
                    ctrl = alu_write(rt, AluOp::Add, value, 0);
                }
            }
            Instruction::Lw { rt, rs, offset } => {
                ctrl = alu_write(rt, AluOp::Add, r(rs), offset as u32);
                ctrl.mem_op = MemOp::Load;
            }
            Instruction::Sw { rt, rs, offset } => {
                ctrl.alu_src1 = r(rs);
                ctrl.alu_src2 = offset as u32;
                ctrl.mem_op = MemOp::Store;
                ctrl.store_data = r(rt);
            }
        }

        Ok((ctrl, redirect))
    }

    /// Applies the decode policy to an unsupported encoding.
    ///
    /// Under `Warn` the instruction retires with no architectural effect and
    /// one clock cycle; under `Fatal` the error is returned.
    fn unsupported(&mut self, pc: u32, raw: u32, kind: UnsupportedKind) -> Result<Status, SimError> {
        let severity = match kind {
            UnsupportedKind::Function(_) => self.policy.unknown_function,
            UnsupportedKind::Opcode(_) => self.policy.unknown_opcode,
        };
        let err = SimError::UnsupportedOperation { pc, raw, kind };

        match severity {
            Severity::Fatal => Err(err),
            Severity::Warn => {
                tracing::warn!("{err}");
                self.hazards.advance_clock();
                self.instructions += 1;
                Ok(Status::Running)
            }
        }
    }

    /// Emits the per-instruction traces that are switched on.
    fn trace_retired(&self, pc: u32, raw: u32, inst: &Instruction) {
        if self.trace.instructions {
            tracing::debug!(
                "{pc:#010x}: {raw:08x}  {}",
                format_instruction(inst, pc)
            );
        }
        if self.trace.registers {
            tracing::debug!("registers after {pc:#010x}:\n{}", self.regs);
        }
        if self.trace.pipeline {
            tracing::debug!(cycle = self.hazards.cycles(), "{}", self.hazards.diagram());
        }
    }
}

/// Signals for an ALU result written to a general-purpose register.
const fn alu_write(rd: usize, op: AluOp, a: u32, b: u32) -> ControlSignals {
    ControlSignals {
        write_dest: true,
        dest_reg: rd,
        mem_op: MemOp::None,
        mult_div: false,
        alu_op: op,
        alu_src1: a,
        alu_src2: b,
        store_data: 0,
    }
}

/// Signals for a multiply or divide that writes `hi`/`lo`.
const fn hilo_write(op: AluOp, a: u32, b: u32) -> ControlSignals {
    ControlSignals {
        write_dest: false,
        dest_reg: 0,
        mem_op: MemOp::None,
        mult_div: true,
        alu_op: op,
        alu_src1: a,
        alu_src2: b,
        store_data: 0,
    }
}

/// Performs a trap service; returns the value to write to `rt`, if any.
fn service<C: Console>(
    pc: u32,
    code: u32,
    rs_value: u32,
    console: &mut C,
) -> Result<Option<u32>, SimError> {
    match code {
        TRAP_PRINT_NEWLINE => {
            console.write_str("\n")?;
            Ok(None)
        }
        TRAP_PRINT_INT => {
            console.write_str(&format!(" {}", rs_value as i32))?;
            Ok(None)
        }
        TRAP_READ_INT => {
            console.write_str("\n? ")?;
            let line = console
                .read_line()?
                .ok_or_else(|| SimError::Console("unexpected end of input".to_owned()))?;
            let value = line.trim().parse::<i32>().map_err(|_| {
                SimError::Console(format!("expected an integer, got {line:?}"))
            })?;
            Ok(Some(value as u32))
        }
        _ => Err(SimError::UnsupportedSystemRequest { pc, code }),
    }
}
