//! AXP192 power-management chip driver
//!
//! Only what battery sampling needs: identity check, battery-voltage ADC
//! enable, and reading the 12-bit battery voltage (1.1 mV per LSB).

use embedded_hal::i2c::I2c;

use crate::config::power::AXP192_ADDRESS;
use crate::power::traits::{PowerError, PowerProvider};

/// AXP192 register addresses
mod reg {
    pub const IC_TYPE: u8 = 0x03;
    pub const ADC_ENABLE_1: u8 = 0x82;
    /// Battery voltage bits 11..4; bits 3..0 follow in the next register
    pub const BATTERY_VOLTAGE_H8: u8 = 0x78;
}

/// Value of the IC type register on an AXP192
const AXP192_CHIP_ID: u8 = 0x03;

/// Battery voltage ADC enable bit in ADC_ENABLE_1
const ADC_BATTERY_VOLTAGE: u8 = 1 << 7;

/// AXP192 on an I2C bus
pub struct Axp192<I2C> {
    i2c: I2C,
    address: u8,
    initialised: bool,
}

impl<I2C: I2c> Axp192<I2C> {
    /// Driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, AXP192_ADDRESS)
    }

    /// Driver at a custom address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            initialised: false,
        }
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_reg(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let mut buf = [0u8];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    fn write_reg(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[register, value])
    }
}

impl<I2C: I2c> PowerProvider for Axp192<I2C> {
    fn initialize(&mut self) -> Result<(), PowerError> {
        self.initialised = false;

        let chip_id = self
            .read_reg(reg::IC_TYPE)
            .map_err(|_| PowerError::NotResponding)?;
        if chip_id != AXP192_CHIP_ID {
            return Err(PowerError::UnexpectedChip(chip_id));
        }

        let adc = self
            .read_reg(reg::ADC_ENABLE_1)
            .map_err(|_| PowerError::Bus)?;
        if adc & ADC_BATTERY_VOLTAGE == 0 {
            self.write_reg(reg::ADC_ENABLE_1, adc | ADC_BATTERY_VOLTAGE)
                .map_err(|_| PowerError::Bus)?;
        }

        self.initialised = true;
        Ok(())
    }

    fn battery_millivolts(&mut self) -> Result<u16, PowerError> {
        if !self.initialised {
            return Err(PowerError::NotResponding);
        }

        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg::BATTERY_VOLTAGE_H8], &mut buf)
            .map_err(|_| PowerError::Bus)?;

        let raw = (u16::from(buf[0]) << 4) | u16::from(buf[1] & 0x0F);
        Ok(raw * 11 / 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    /// Register-file I2C device with auto-incrementing register pointer
    struct MockI2c {
        address: u8,
        registers: [u8; 256],
        pointer: u8,
        present: bool,
        writes: Vec<(u8, u8)>,
    }

    impl MockI2c {
        fn axp192() -> Self {
            let mut registers = [0u8; 256];
            registers[reg::IC_TYPE as usize] = AXP192_CHIP_ID;
            Self {
                address: AXP192_ADDRESS,
                registers,
                pointer: 0,
                present: true,
                writes: Vec::new(),
            }
        }

        fn set_battery_raw(&mut self, raw: u16) {
            self.registers[0x78] = (raw >> 4) as u8;
            self.registers[0x79] = (raw & 0x0F) as u8;
        }
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if !self.present || address != self.address {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }

            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((&register, values)) = bytes.split_first() {
                            self.pointer = register;
                            for &value in values {
                                self.registers[self.pointer as usize] = value;
                                self.writes.push((self.pointer, value));
                                self.pointer = self.pointer.wrapping_add(1);
                            }
                        }
                    }
                    Operation::Read(buf) => {
                        for byte in buf.iter_mut() {
                            *byte = self.registers[self.pointer as usize];
                            self.pointer = self.pointer.wrapping_add(1);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_initialize_enables_battery_adc() {
        let mut pmu = Axp192::new(MockI2c::axp192());

        pmu.initialize().unwrap();

        let bus = pmu.release();
        assert_eq!(bus.writes, vec![(reg::ADC_ENABLE_1, ADC_BATTERY_VOLTAGE)]);
    }

    #[test]
    fn test_initialize_skips_write_when_adc_enabled() {
        let mut bus = MockI2c::axp192();
        bus.registers[reg::ADC_ENABLE_1 as usize] = 0x83;
        let mut pmu = Axp192::new(bus);

        pmu.initialize().unwrap();

        assert!(pmu.release().writes.is_empty());
    }

    #[test]
    fn test_missing_chip() {
        let mut bus = MockI2c::axp192();
        bus.present = false;
        let mut pmu = Axp192::new(bus);

        assert_eq!(pmu.initialize(), Err(PowerError::NotResponding));
        assert_eq!(pmu.battery_millivolts(), Err(PowerError::NotResponding));
    }

    #[test]
    fn test_wrong_chip_id() {
        let mut bus = MockI2c::axp192();
        bus.registers[reg::IC_TYPE as usize] = 0x41;
        let mut pmu = Axp192::new(bus);

        assert_eq!(pmu.initialize(), Err(PowerError::UnexpectedChip(0x41)));
    }

    #[test]
    fn test_battery_voltage_conversion() {
        let mut bus = MockI2c::axp192();
        // 3781 * 1.1 mV = 4159.1 mV
        bus.set_battery_raw(3781);
        let mut pmu = Axp192::new(bus);

        pmu.initialize().unwrap();

        assert_eq!(pmu.battery_millivolts(), Ok(4159));
    }

    #[test]
    fn test_read_before_initialize_fails() {
        let mut pmu = Axp192::new(MockI2c::axp192());

        assert_eq!(pmu.battery_millivolts(), Err(PowerError::NotResponding));
    }

    #[test]
    fn test_custom_address() {
        let mut bus = MockI2c::axp192();
        bus.address = 0x35;
        let mut pmu = Axp192::with_address(bus, 0x35);

        assert!(pmu.initialize().is_ok());
    }
}
