use crate::settings::SettingsStore;
use std::ffi::{OsStr, OsString};
use std::io;
use std::os::windows::ffi::{OsStrExt, OsStringExt};
use std::ptr;
use winapi::shared::minwindef::{DWORD, HKEY};
use winapi::shared::winerror::{ERROR_FILE_NOT_FOUND, ERROR_NO_MORE_ITEMS, ERROR_SUCCESS};
use winapi::um::winnt::{KEY_READ, REG_EXPAND_SZ, REG_SZ};
use winapi::um::winreg::{
    RegCloseKey, RegEnumKeyExW, RegEnumValueW, RegOpenKeyExW, RegQueryInfoKeyW,
    RegQueryValueExW, HKEY_CURRENT_USER,
};

// Registry key names are limited to 255 characters.
const MAX_KEY_NAME: usize = 256;

/// HKEY_CURRENT_USER, read-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsRegistry;

impl SettingsStore for WindowsRegistry {
    fn subkeys(&self) -> io::Result<Vec<String>> {
        let root = RegKey::open(HKEY_CURRENT_USER, "")?;
        root.subkey_names()
    }

    fn values(&self, subkey: &str) -> io::Result<Vec<String>> {
        let key = RegKey::open(HKEY_CURRENT_USER, subkey)?;
        key.string_values()
    }

    fn read_string(&self, key: &str, name: &str) -> io::Result<Option<String>> {
        let key = match RegKey::open(HKEY_CURRENT_USER, key) {
            Ok(key) => key,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        key.query_string(name)
    }
}

/// Open registry handle, closed on drop.
struct RegKey(HKEY);

impl RegKey {
    fn open(parent: HKEY, path: &str) -> io::Result<Self> {
        let wide = to_wide(OsStr::new(path));
        let mut handle: HKEY = ptr::null_mut();
        let status = unsafe { RegOpenKeyExW(parent, wide.as_ptr(), 0, KEY_READ, &mut handle) };
        check(status)?;
        Ok(Self(handle))
    }

    fn subkey_names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        let mut index: DWORD = 0;
        loop {
            let mut buf = [0u16; MAX_KEY_NAME];
            let mut len = buf.len() as DWORD;
            let status = unsafe {
                RegEnumKeyExW(
                    self.0,
                    index,
                    buf.as_mut_ptr(),
                    &mut len,
                    ptr::null_mut(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                )
            };
            if status as DWORD == ERROR_NO_MORE_ITEMS {
                break;
            }
            check(status)?;
            names.push(from_wide(&buf[..len as usize]));
            index += 1;
        }
        Ok(names)
    }

    fn string_values(&self) -> io::Result<Vec<String>> {
        let mut max_name_len: DWORD = 0;
        let mut max_data_len: DWORD = 0;
        let status = unsafe {
            RegQueryInfoKeyW(
                self.0,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                &mut max_name_len,
                &mut max_data_len,
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        check(status)?;

        let mut values = Vec::new();
        let mut index: DWORD = 0;
        loop {
            let mut name = vec![0u16; max_name_len as usize + 1];
            let mut name_len = name.len() as DWORD;
            // Data is counted in bytes; keep room for a terminator.
            let mut data = vec![0u16; max_data_len as usize / 2 + 1];
            let mut data_len = (data.len() * 2) as DWORD;
            let mut kind: DWORD = 0;
            let status = unsafe {
                RegEnumValueW(
                    self.0,
                    index,
                    name.as_mut_ptr(),
                    &mut name_len,
                    ptr::null_mut(),
                    &mut kind,
                    data.as_mut_ptr() as *mut u8,
                    &mut data_len,
                )
            };
            if status as DWORD == ERROR_NO_MORE_ITEMS {
                break;
            }
            check(status)?;
            if kind == REG_SZ || kind == REG_EXPAND_SZ {
                values.push(from_wide(&data[..data_len as usize / 2]));
            }
            index += 1;
        }
        Ok(values)
    }

    fn query_string(&self, name: &str) -> io::Result<Option<String>> {
        let wide = to_wide(OsStr::new(name));
        let mut kind: DWORD = 0;
        let mut len: DWORD = 0;
        let status = unsafe {
            RegQueryValueExW(
                self.0,
                wide.as_ptr(),
                ptr::null_mut(),
                &mut kind,
                ptr::null_mut(),
                &mut len,
            )
        };
        if status as DWORD == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        check(status)?;
        if kind != REG_SZ && kind != REG_EXPAND_SZ {
            return Ok(None);
        }

        let mut data = vec![0u16; len as usize / 2 + 1];
        let mut len = (data.len() * 2) as DWORD;
        let status = unsafe {
            RegQueryValueExW(
                self.0,
                wide.as_ptr(),
                ptr::null_mut(),
                &mut kind,
                data.as_mut_ptr() as *mut u8,
                &mut len,
            )
        };
        check(status)?;
        Ok(Some(from_wide(&data[..len as usize / 2])))
    }
}

impl Drop for RegKey {
    fn drop(&mut self) {
        unsafe {
            RegCloseKey(self.0);
        }
    }
}

fn check(status: i32) -> io::Result<()> {
    if status as DWORD == ERROR_SUCCESS {
        Ok(())
    } else {
        Err(io::Error::from_raw_os_error(status))
    }
}

fn to_wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(std::iter::once(0)).collect()
}

/// Decodes UTF-16 registry data, dropping everything from the first NUL.
fn from_wide(buf: &[u16]) -> String {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    OsString::from_wide(&buf[..end])
        .to_string_lossy()
        .into_owned()
}
