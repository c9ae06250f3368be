mod cipher;
